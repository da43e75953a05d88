/// Lazily compiled, process-wide regex for a literal helper pattern.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Compile a grammar rule.
///
/// ```ignore
/// rule! {
///     name: "civic_full_typed",
///     family: RuleFamily::Civic,
///     buckets: BucketMask::HAS_DIGITS,
///     pattern: format!("{number}{street}{tail}"),
/// }
/// ```
///
/// Expands to a `Result<Rule>`; `buckets` defaults to none.
macro_rules! rule {
    (
        name: $name:expr,
        family: $family:expr
        $(, buckets: $buckets:expr)?
        , pattern: $pattern:expr
        $(,)?
    ) => {{
        $crate::Rule::compile(
            $name,
            $family,
            $crate::engine::BucketMask::empty() $(| $buckets)?,
            &$pattern,
        )
    }};
}
