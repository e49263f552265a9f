/// Currency / token symbol as reported by a source, in the source's own casing
pub type Currency = String;
