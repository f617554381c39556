use serde::{Deserialize, Serialize};

/// Resource record / question type (RFC 1035 §3.2.2).
///
/// Codes outside the known set are representable as `Unknown` so a
/// message carrying them still round-trips through the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum QueryType {
    A,
    Ns,
    Cname,
    Ptr,
    Hinfo,
    Mx,
    Axfr,
    Any,
    Unknown(u16),
}

impl QueryType {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => QueryType::A,
            2 => QueryType::Ns,
            5 => QueryType::Cname,
            12 => QueryType::Ptr,
            13 => QueryType::Hinfo,
            15 => QueryType::Mx,
            252 => QueryType::Axfr,
            255 => QueryType::Any,
            other => QueryType::Unknown(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            QueryType::A => 1,
            QueryType::Ns => 2,
            QueryType::Cname => 5,
            QueryType::Ptr => 12,
            QueryType::Hinfo => 13,
            QueryType::Mx => 15,
            QueryType::Axfr => 252,
            QueryType::Any => 255,
            QueryType::Unknown(code) => *code,
        }
    }
}

impl From<u16> for QueryType {
    fn from(code: u16) -> Self {
        QueryType::from_code(code)
    }
}

impl From<QueryType> for u16 {
    fn from(query_type: QueryType) -> Self {
        query_type.code()
    }
}

/// Question / record class. Only Internet is in practical use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum QueryClass {
    Internet,
    Unknown(u16),
}

impl QueryClass {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => QueryClass::Internet,
            other => QueryClass::Unknown(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            QueryClass::Internet => 1,
            QueryClass::Unknown(code) => *code,
        }
    }
}

impl From<u16> for QueryClass {
    fn from(code: u16) -> Self {
        QueryClass::from_code(code)
    }
}

impl From<QueryClass> for u16 {
    fn from(query_class: QueryClass) -> Self {
        query_class.code()
    }
}

/// Header OPCODE field (4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    Query,
    InverseQuery,
    Status,
    Notify,
    Update,
    Unknown(u8),
}

impl OpCode {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => OpCode::Query,
            1 => OpCode::InverseQuery,
            2 => OpCode::Status,
            4 => OpCode::Notify,
            5 => OpCode::Update,
            other => OpCode::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            OpCode::Query => 0,
            OpCode::InverseQuery => 1,
            OpCode::Status => 2,
            OpCode::Notify => 4,
            OpCode::Update => 5,
            OpCode::Unknown(code) => *code,
        }
    }
}

/// Header RCODE field (4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RCode {
    NoError,
    NameError,
    Refused,
    Unknown(u8),
}

impl RCode {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => RCode::NoError,
            3 => RCode::NameError,
            5 => RCode::Refused,
            other => RCode::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            RCode::NoError => 0,
            RCode::NameError => 3,
            RCode::Refused => 5,
            RCode::Unknown(code) => *code,
        }
    }
}
