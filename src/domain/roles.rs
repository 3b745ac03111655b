//! Role abstraction shared by every person variant.

/// Common surface for people affiliated with the university.
///
/// Each variant answers with its own role string and duty list, so
/// heterogeneous member collections can be reported on uniformly.
pub trait Role {
    /// Descriptive role string, including the variant (e.g.
    /// "Undergraduate Student (Junior)").
    fn role(&self) -> String;

    /// Role-specific list of duties.
    fn responsibilities(&self) -> Vec<String>;
}
