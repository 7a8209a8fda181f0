use super::fields::FieldMap;
use super::payload::{render_lines, CanonicalPayload};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keys that only an e-ticket form sends.
const E_TICKET_KEYS: &[&str] = &[
    "ticketNumber",
    "etFirstName",
    "etLastName",
    "etFlight",
    "etFrom",
    "etTo",
    "etDate",
    "etTime",
    "pnrEt",
];

/// Keys that only a baggage tag form sends.
const BAGGAGE_TAG_KEYS: &[&str] = &[
    "bagNumber",
    "bagFirstName",
    "bagLastName",
    "bagFlight",
    "bagFrom",
    "bagTo",
    "bagPnr",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    BoardingPass,
    BaggageTag,
    ETicket,
}

impl DocumentKind {
    /// First line of the QR payload.
    pub fn header(&self) -> &'static str {
        match self {
            DocumentKind::BoardingPass => "BOARDING PASS",
            DocumentKind::BaggageTag => "BAGGAGE TAG",
            DocumentKind::ETicket => "E-TICKET",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::BoardingPass => "boarding_pass",
            DocumentKind::BaggageTag => "baggage_tag",
            DocumentKind::ETicket => "e_ticket",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
}

impl Passenger {
    fn read(fields: &FieldMap, first: &[&str], last: &[&str], defaults: (&str, &str)) -> Self {
        Self {
            first_name: fields.lookup(first, defaults.0),
            last_name: fields.lookup(last, defaults.1),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub flight: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardingPass {
    pub passenger: Passenger,
    pub route: Route,
    pub date: String,
    pub time: String,
    pub seat: String,
    pub gate: String,
    pub pnr: String,
    pub boarding_time: String,
    pub class: String,
    pub sequence: String,
}

impl BoardingPass {
    pub fn from_fields(fields: &FieldMap) -> Self {
        Self {
            passenger: Passenger::read(fields, &["firstName"], &["lastName"], ("Rahul", "Sharma")),
            route: Route {
                flight: fields.lookup(&["flight"], "AI 2727"),
                from: fields.lookup(&["from"], "BOM"),
                to: fields.lookup(&["to"], "DEL"),
            },
            date: fields.lookup(&["date"], "2025-09-10"),
            time: fields.lookup(&["time"], "13:15"),
            seat: fields.lookup(&["seat"], "17A"),
            gate: fields.lookup(&["gate"], "07"),
            pnr: fields.lookup(&["pnr"], "ABC123"),
            boarding_time: fields.lookup(&["boardingTime"], "12:45"),
            class: fields.lookup(&["class"], "Y"),
            sequence: fields.lookup(&["sequence"], "001A"),
        }
    }

    fn qr_text(&self) -> String {
        let passenger = self.passenger.full_name();
        render_lines(
            DocumentKind::BoardingPass.header(),
            &[
                ("Passenger", passenger.as_str()),
                ("Flight", self.route.flight.as_str()),
                ("From", self.route.from.as_str()),
                ("To", self.route.to.as_str()),
                ("Date", self.date.as_str()),
                ("Time", self.time.as_str()),
                ("Seat", self.seat.as_str()),
                ("Gate", self.gate.as_str()),
                ("PNR", self.pnr.as_str()),
                ("Boarding", self.boarding_time.as_str()),
                ("Class", self.class.as_str()),
                ("Seq", self.sequence.as_str()),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaggageTag {
    pub passenger: Passenger,
    pub route: Route,
    pub pnr: String,
    pub bag_number: String,
}

impl BaggageTag {
    pub fn from_fields(fields: &FieldMap) -> Self {
        Self {
            passenger: Passenger::read(
                fields,
                &["bagFirstName", "firstName"],
                &["bagLastName", "lastName"],
                ("Priya", "Patel"),
            ),
            route: Route {
                flight: fields.lookup(&["bagFlight", "flight"], "AI0121"),
                from: fields.lookup(&["bagFrom", "from"], "BOM"),
                to: fields.lookup(&["bagTo", "to"], "DEL"),
            },
            pnr: fields.lookup(&["bagPnr", "pnr"], "ABC123"),
            bag_number: fields.lookup(&["bagNumber"], "0000-615742"),
        }
    }

    fn qr_text(&self) -> String {
        let passenger = self.passenger.full_name();
        render_lines(
            DocumentKind::BaggageTag.header(),
            &[
                ("Passenger", passenger.as_str()),
                ("Flight", self.route.flight.as_str()),
                ("From", self.route.from.as_str()),
                ("To", self.route.to.as_str()),
                ("PNR", self.pnr.as_str()),
                ("Tag", self.bag_number.as_str()),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ETicket {
    pub passenger: Passenger,
    pub route: Route,
    pub date: String,
    pub time: String,
    pub pnr: String,
    pub ticket_number: String,
}

impl ETicket {
    pub fn from_fields(fields: &FieldMap) -> Self {
        Self {
            passenger: Passenger::read(
                fields,
                &["etFirstName", "firstName"],
                &["etLastName", "lastName"],
                ("Rahul", "Sharma"),
            ),
            route: Route {
                flight: fields.lookup(&["etFlight", "flight"], "AI 2727"),
                from: fields.lookup(&["etFrom", "from"], "BOM"),
                to: fields.lookup(&["etTo", "to"], "DEL"),
            },
            date: fields.lookup(&["etDate", "date"], "2025-09-10"),
            time: fields.lookup(&["etTime", "time"], "13:15"),
            pnr: fields.lookup(&["pnrEt", "pnr"], "ABC123"),
            ticket_number: fields.lookup(&["ticketNumber"], "1234567890123"),
        }
    }

    fn qr_text(&self) -> String {
        let passenger = self.passenger.full_name();
        render_lines(
            DocumentKind::ETicket.header(),
            &[
                ("Passenger", passenger.as_str()),
                ("Flight", self.route.flight.as_str()),
                ("From", self.route.from.as_str()),
                ("To", self.route.to.as_str()),
                ("Date", self.date.as_str()),
                ("Time", self.time.as_str()),
                ("PNR", self.pnr.as_str()),
                ("Ticket", self.ticket_number.as_str()),
            ],
        )
    }
}

/// One travel document, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRequest {
    BoardingPass(BoardingPass),
    BaggageTag(BaggageTag),
    ETicket(ETicket),
}

impl DocumentRequest {
    /// Pick the most specific kind whose identifying keys were submitted:
    /// e-ticket, then baggage tag, then boarding pass.
    pub fn from_fields(fields: &FieldMap) -> Self {
        if fields.contains_any(E_TICKET_KEYS) {
            DocumentRequest::ETicket(ETicket::from_fields(fields))
        } else if fields.contains_any(BAGGAGE_TAG_KEYS) {
            DocumentRequest::BaggageTag(BaggageTag::from_fields(fields))
        } else {
            DocumentRequest::BoardingPass(BoardingPass::from_fields(fields))
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentRequest::BoardingPass(_) => DocumentKind::BoardingPass,
            DocumentRequest::BaggageTag(_) => DocumentKind::BaggageTag,
            DocumentRequest::ETicket(_) => DocumentKind::ETicket,
        }
    }

    /// The single identifier carried by the linear barcode.
    pub fn barcode_text(&self) -> &str {
        match self {
            DocumentRequest::BoardingPass(pass) => &pass.pnr,
            DocumentRequest::BaggageTag(tag) => &tag.bag_number,
            DocumentRequest::ETicket(ticket) => &ticket.ticket_number,
        }
    }

    pub fn qr_text(&self) -> String {
        match self {
            DocumentRequest::BoardingPass(pass) => pass.qr_text(),
            DocumentRequest::BaggageTag(tag) => tag.qr_text(),
            DocumentRequest::ETicket(ticket) => ticket.qr_text(),
        }
    }

    pub fn canonical_payload(&self) -> CanonicalPayload {
        CanonicalPayload {
            document_kind: self.kind(),
            qr_text: self.qr_text(),
            barcode_text: self.barcode_text().to_string(),
        }
    }
}
