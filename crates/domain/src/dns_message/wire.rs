//! Binary codec for DNS messages.
//!
//! Decoding accepts label compression pointers; encoding never emits
//! them and always writes names in full label form. The asymmetry is
//! deliberate: compressed reads keep us interoperable, flat writes keep
//! the encoder simple at the cost of slightly larger datagrams.

use super::codes::{OpCode, QueryClass, QueryType, RCode};
use super::{Message, Question, Record};
use crate::errors::DomainError;

const HEADER_LEN: usize = 12;

const POINTER_TAG: u8 = 0b1100_0000;
const POINTER_OFFSET_MASK: u8 = 0b0011_1111;

/// Cap on pointer jumps per name, so a pointer cycle in a hostile
/// datagram becomes a decode error instead of an infinite loop.
const MAX_POINTER_JUMPS: usize = 16;

fn malformed(reason: impl Into<String>) -> DomainError {
    DomainError::MalformedMessage(reason.into())
}

/// Bounds-checked cursor over the raw datagram.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn read_u8(&mut self) -> Result<u8, DomainError> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or_else(|| malformed("unexpected end of message"))?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_i32(&mut self) -> Result<i32, DomainError> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| malformed("unexpected end of message"))?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn jump_to(&mut self, offset: usize) -> Result<(), DomainError> {
        if offset >= self.buf.len() {
            return Err(malformed(format!(
                "compression pointer to offset {} past end of message",
                offset
            )));
        }
        self.pos = offset;
        Ok(())
    }
}

/// Decodes a whole message, failing with `MalformedMessage` if the
/// buffer is shorter than the fixed header or any parse walks past its
/// end.
pub fn decode(buf: &[u8]) -> Result<Message, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(malformed(format!(
            "{} bytes is shorter than the {}-byte header",
            buf.len(),
            HEADER_LEN
        )));
    }

    let mut reader = Reader::new(buf);
    let id = reader.read_u16()?;

    let flags1 = reader.read_u8()?;
    let is_response = flags1 & 0b1000_0000 != 0;
    let op_code = OpCode::from_code((flags1 & 0b0111_1000) >> 3);
    let authoritative_answer = flags1 & 0b0000_0100 != 0;
    let truncated = flags1 & 0b0000_0010 != 0;
    let recursion_desired = flags1 & 0b0000_0001 != 0;

    let flags2 = reader.read_u8()?;
    let recursion_available = flags2 & 0b1000_0000 != 0;
    let r_code = RCode::from_code(flags2 & 0b0000_1111);

    let question_count = reader.read_u16()?;
    let answer_count = reader.read_u16()?;
    let authority_count = reader.read_u16()?;
    let additional_count = reader.read_u16()?;

    let mut questions = Vec::with_capacity(question_count as usize);
    for _ in 0..question_count {
        questions.push(read_question(&mut reader)?);
    }
    let mut answers = Vec::with_capacity(answer_count as usize);
    for _ in 0..answer_count {
        answers.push(read_record(&mut reader)?);
    }
    let mut authorities = Vec::with_capacity(authority_count as usize);
    for _ in 0..authority_count {
        authorities.push(read_record(&mut reader)?);
    }
    let mut additionals = Vec::with_capacity(additional_count as usize);
    for _ in 0..additional_count {
        additionals.push(read_record(&mut reader)?);
    }

    Ok(Message {
        id,
        is_response,
        op_code,
        authoritative_answer,
        truncated,
        recursion_desired,
        recursion_available,
        r_code,
        questions,
        answers,
        authorities,
        additionals,
    })
}

/// Reads a possibly-compressed name as a dotted string.
///
/// Only the first pointer encountered sets the resume position; once
/// the terminating zero is reached via the jump, parsing continues
/// right after that first 2-byte pointer no matter how many further
/// pointers were chased inside the jumped-to region.
fn read_name(reader: &mut Reader<'_>) -> Result<String, DomainError> {
    let mut labels: Vec<String> = Vec::new();
    let mut resume_at: Option<usize> = None;
    let mut jumps = 0usize;

    loop {
        let len = reader.read_u8()?;
        if len == 0 {
            break;
        }
        if len & POINTER_TAG == POINTER_TAG {
            let low = reader.read_u8()?;
            let offset = usize::from(len & POINTER_OFFSET_MASK) << 8 | usize::from(low);
            if resume_at.is_none() {
                resume_at = Some(reader.pos);
            }
            jumps += 1;
            if jumps > MAX_POINTER_JUMPS {
                return Err(malformed("compression pointer loop"));
            }
            reader.jump_to(offset)?;
            continue;
        }
        let label = reader.read_bytes(len as usize)?;
        labels.push(String::from_utf8_lossy(label).into_owned());
    }

    if let Some(pos) = resume_at {
        reader.pos = pos;
    }
    Ok(labels.join("."))
}

fn read_question(reader: &mut Reader<'_>) -> Result<Question, DomainError> {
    let name = read_name(reader)?;
    let query_type = QueryType::from_code(reader.read_u16()?);
    let query_class = QueryClass::from_code(reader.read_u16()?);
    Ok(Question {
        name,
        query_type,
        query_class,
    })
}

fn read_record(reader: &mut Reader<'_>) -> Result<Record, DomainError> {
    let name = read_name(reader)?;
    let query_type = QueryType::from_code(reader.read_u16()?);
    let query_class = QueryClass::from_code(reader.read_u16()?);
    let ttl = reader.read_i32()?;
    let data_len = reader.read_u16()?;
    let data = reader.read_bytes(data_len as usize)?.to_vec();
    Ok(Record {
        name,
        query_type,
        query_class,
        ttl,
        data,
    })
}

/// Encodes a message. Names are always written uncompressed and all
/// multi-byte integers are big-endian.
pub fn encode(message: &Message) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + 64);
    out.extend_from_slice(&message.id.to_be_bytes());

    let mut flags1 = 0u8;
    if message.is_response {
        flags1 |= 0b1000_0000;
    }
    flags1 |= (message.op_code.code() & 0b0000_1111) << 3;
    if message.authoritative_answer {
        flags1 |= 0b0000_0100;
    }
    if message.truncated {
        flags1 |= 0b0000_0010;
    }
    if message.recursion_desired {
        flags1 |= 0b0000_0001;
    }
    out.push(flags1);

    let mut flags2 = 0u8;
    if message.recursion_available {
        flags2 |= 0b1000_0000;
    }
    flags2 |= message.r_code.code() & 0b0000_1111;
    out.push(flags2);

    out.extend_from_slice(&(message.questions.len() as u16).to_be_bytes());
    out.extend_from_slice(&(message.answers.len() as u16).to_be_bytes());
    out.extend_from_slice(&(message.authorities.len() as u16).to_be_bytes());
    out.extend_from_slice(&(message.additionals.len() as u16).to_be_bytes());

    for question in &message.questions {
        write_question(&mut out, question);
    }
    for record in &message.answers {
        write_record(&mut out, record);
    }
    for record in &message.authorities {
        write_record(&mut out, record);
    }
    for record in &message.additionals {
        write_record(&mut out, record);
    }
    out
}

fn write_name(out: &mut Vec<u8>, name: &str) {
    for label in name.split('.').filter(|label| !label.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
}

fn write_question(out: &mut Vec<u8>, question: &Question) {
    write_name(out, &question.name);
    out.extend_from_slice(&question.query_type.code().to_be_bytes());
    out.extend_from_slice(&question.query_class.code().to_be_bytes());
}

fn write_record(out: &mut Vec<u8>, record: &Record) {
    write_name(out, &record.name);
    out.extend_from_slice(&record.query_type.code().to_be_bytes());
    out.extend_from_slice(&record.query_class.code().to_be_bytes());
    out.extend_from_slice(&record.ttl.to_be_bytes());
    out.extend_from_slice(&(record.data.len() as u16).to_be_bytes());
    out.extend_from_slice(&record.data);
}
