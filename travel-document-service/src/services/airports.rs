#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airport {
    pub code: &'static str,
    pub city: &'static str,
    pub lat: f64,
    pub lon: f64,
}

pub const AIRPORTS: [Airport; 10] = [
    Airport { code: "DEL", city: "Delhi", lat: 28.6139, lon: 77.2090 },
    Airport { code: "BOM", city: "Mumbai", lat: 19.0760, lon: 72.8777 },
    Airport { code: "BLR", city: "Bangalore", lat: 12.9716, lon: 77.5946 },
    Airport { code: "MAA", city: "Chennai", lat: 13.0827, lon: 80.2707 },
    Airport { code: "HYD", city: "Hyderabad", lat: 17.3850, lon: 78.4867 },
    Airport { code: "CCU", city: "Kolkata", lat: 22.5726, lon: 88.3639 },
    Airport { code: "AMD", city: "Ahmedabad", lat: 23.0225, lon: 72.5714 },
    Airport { code: "GOI", city: "Goa", lat: 15.2993, lon: 74.1240 },
    Airport { code: "PNQ", city: "Pune", lat: 18.5204, lon: 73.8567 },
    Airport { code: "COK", city: "Kochi", lat: 9.9312, lon: 76.2673 },
];

/// Case-insensitive IATA lookup.
pub fn find_airport(code: &str) -> Option<&'static Airport> {
    AIRPORTS
        .iter()
        .find(|airport| airport.code.eq_ignore_ascii_case(code.trim()))
}

pub fn airport_codes() -> Vec<&'static str> {
    AIRPORTS.iter().map(|airport| airport.code).collect()
}
