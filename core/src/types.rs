//! Shared primitive types used across the intake core.

/// A short, human-shareable ticket identifier.
/// Always 8 characters, uppercase, alphanumeric.
pub type TicketId = String;
