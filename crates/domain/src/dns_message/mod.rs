//! DNS wire message model (RFC 1035 subset).

mod codes;
mod question;
mod record;
pub mod wire;

pub use codes::{OpCode, QueryClass, QueryType, RCode};
pub use question::Question;
pub use record::Record;

/// A decoded DNS message: header flags plus the four sections.
///
/// Section counts are always derived from the vector lengths and are
/// never stored independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u16,
    pub is_response: bool,
    pub op_code: OpCode,
    pub authoritative_answer: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub r_code: RCode,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
    pub authorities: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl Message {
    /// Builds a fresh query message.
    pub fn query(id: u16, questions: Vec<Question>) -> Self {
        Self {
            id,
            is_response: false,
            op_code: OpCode::Query,
            authoritative_answer: false,
            truncated: false,
            recursion_desired: false,
            recursion_available: false,
            r_code: RCode::NoError,
            questions,
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        }
    }

    /// Synthesizes a non-authoritative response to `query`, echoing its
    /// ID, opcode and question section.
    pub fn response(query: &Message, r_code: RCode, answers: Vec<Record>) -> Self {
        Self {
            id: query.id,
            is_response: true,
            op_code: query.op_code,
            authoritative_answer: false,
            truncated: false,
            recursion_desired: false,
            recursion_available: false,
            r_code,
            questions: query.questions.clone(),
            answers,
            authorities: vec![],
            additionals: vec![],
        }
    }

    /// Synthesizes the terminal refused answer for `query`.
    pub fn refused(query: &Message) -> Self {
        Self::response(query, RCode::Refused, vec![])
    }
}
