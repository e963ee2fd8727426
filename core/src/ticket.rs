//! Ticket id generation.
//!
//! RULE: the generator never inspects existing records. Ids are drawn from
//! a random space large enough that collisions are accepted as a stated
//! tradeoff at this record volume, not checked for.

use crate::types::TicketId;
use uuid::Uuid;

pub struct TicketIdGenerator;

impl TicketIdGenerator {
    /// The first eight hex digits of a v4 UUID, uppercased: an 8-character,
    /// uppercase, alphanumeric token a submitter can read back over a desk.
    pub fn new_id() -> TicketId {
        let hex = Uuid::new_v4().simple().to_string();
        hex[..8].to_uppercase()
    }
}
