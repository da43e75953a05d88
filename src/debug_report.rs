use postal_grammar::{Country, ParseDetails, ParsedLocation};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Attempts listed before the trace is folded.
const MAX_ATTEMPTS_SHOWN: usize = 12;

pub fn print_run(input: &str, country: Country, location: &ParsedLocation, details: &ParseDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Parsing ({}): \"{}\"", country.code(), input.trim()), ansi::CYAN))
    );
    if details.normalized_input != input.trim() {
        println!("  {} {}", palette.dim("normalized:"), details.normalized_input);
    }

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    print_attempts(details, &palette);

    println!("\n{}", palette.paint("━━━ Record ━━━", ansi::GRAY));
    print_record(location, details, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Matching: {}  │  Resolve: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.matching), ansi::CYAN),
        palette.dim(format!("{:?}", details.resolve)),
    );
    println!();
}

fn print_attempts(details: &ParseDetails, palette: &ansi::Palette) {
    println!(
        "  {} {}",
        palette.paint("Active:", ansi::BLUE),
        palette.dim(format!("{} rules after bucket gating", details.active_rules.len()))
    );

    let shown = details.attempts.len().min(MAX_ATTEMPTS_SHOWN);
    let skipped = details.attempts.len() - shown;
    if skipped > 0 {
        println!("    {}", palette.dim(format!("... {skipped} earlier attempts failed")));
    }

    for attempt in &details.attempts[skipped..] {
        let mark = if attempt.matched { palette.paint("✓", ansi::GREEN) } else { palette.dim("✗") };
        let name = if attempt.matched { palette.bold(palette.paint(&attempt.rule, ansi::GREEN)) } else { palette.dim(&attempt.rule) };
        println!("    {} {} {}", mark, name, palette.dim(format!("{:?}", attempt.elapsed)));
    }
}

fn print_record(location: &ParsedLocation, details: &ParseDetails, palette: &ansi::Palette) {
    let Some(rule) = &details.winning_rule else {
        println!("{}", palette.dim("  No rule consumed the whole input"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • A street type, state or postal code is misspelled or unsupported");
        println!("  • Extra text surrounds the address");
        println!("  • The wrong --country was selected");
        println!("\n{}", palette.dim("  Tip: Set RUST_LOG=postal_grammar=trace to see every rule attempt"));
        return;
    };

    let shape = match location {
        ParsedLocation::Intersection(_) => "intersection",
        _ => "standard",
    };
    println!(
        "  {} {}  {} {}",
        palette.dim("shape:"),
        palette.paint(shape, ansi::BLUE),
        palette.dim("│ rule:"),
        palette.paint(rule, ansi::CYAN)
    );

    for (key, value) in location.fields() {
        println!("  {:>20} {}", palette.paint(key, ansi::YELLOW), palette.bold(value));
    }

    if !details.raw_captures.is_empty() {
        println!("\n  {}", palette.dim("raw captures:"));
        for (key, value) in &details.raw_captures {
            println!("  {:>20} {}", palette.dim(key), palette.dim(format!("{value:?}")));
        }
    }
}
