//! Reference-image palette extraction.

pub(crate) mod extract;
