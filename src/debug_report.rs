use presetta::{
    ContextValidation, DurationContext, ParameterSet, ParsedDuration, ResolutionTrace, TraceOutcome, TraceStep,
    duration_examples, format_duration,
};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
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

pub fn print_duration(parsed: &ParsedDuration, context: DurationContext, validation: &ContextValidation, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Duration: \"{}\"", parsed.parsed_from), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Parse ━━━", ansi::GRAY));
    match &parsed.error {
        None => {
            println!("  {} {}", palette.dim("seconds:"), palette.paint(parsed.value.to_string(), ansi::GREEN));
            println!("  {} {}", palette.dim("verbose:"), palette.paint(format_duration(parsed.value, false), ansi::BLUE));
            println!("  {} {}", palette.dim("short:  "), palette.paint(format_duration(parsed.value, true), ansi::BLUE));
        }
        Some(error) => {
            println!("  {} {}", palette.dim("error:"), palette.paint(error, ansi::RED));
            println!("\n{}", palette.paint(format!("Examples for \"{context}\":"), ansi::YELLOW));
            for example in duration_examples(context) {
                println!("  • {example}");
            }
            return;
        }
    }

    println!("\n{}", palette.paint(format!("━━━ Validity ({context}) ━━━"), ansi::GRAY));
    if validation.valid {
        println!("  {}", palette.paint("✓ valid", ansi::GREEN));
    } else {
        let reason = validation.error.as_deref().unwrap_or("invalid");
        println!("  {}", palette.paint(format!("✗ {reason}"), ansi::RED));
    }
    println!();
}

pub fn print_resolution(resolved: &ParameterSet, trace: &ResolutionTrace, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Resolving preset: \"{}\"", trace.preset), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Steps ━━━", ansi::GRAY));
    if trace.steps.is_empty() {
        println!("{}", palette.dim("  (no preset key; parameters passed through)"));
    }
    for step in &trace.steps {
        println!("  {}", fmt_step(step, &palette));
    }

    println!("\n{}", palette.paint("━━━ Outcome ━━━", ansi::GRAY));
    let outcome = match trace.outcome {
        TraceOutcome::Applied => palette.paint("✓ preset applied", ansi::GREEN),
        TraceOutcome::Passthrough => palette.dim("passthrough (no preset requested)"),
        TraceOutcome::NotFound => palette.paint("✗ preset not found; parameters unchanged", ansi::YELLOW),
        TraceOutcome::Invalid => palette.paint("✗ validation failed; parameters unchanged", ansi::RED),
    };
    println!("  {outcome}");

    println!("\n{}", palette.paint("━━━ Parameters ━━━", ansi::GRAY));
    for (key, value) in resolved {
        println!(
            "  {} {} {}",
            palette.paint(key, ansi::BLUE),
            palette.dim("="),
            palette.paint(value.to_string(), ansi::GREEN)
        );
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Elapsed: {}  {}", palette.paint(format!("{:?}", trace.elapsed), ansi::GREEN), palette.dim(format!("started {}", trace.started_at)));
    println!();
}

fn fmt_step(step: &TraceStep, palette: &ansi::Palette) -> String {
    match step {
        TraceStep::CacheHit => palette.paint("cache hit", ansi::GREEN),
        TraceStep::NegativeCacheHit => palette.paint("cache hit (known absent)", ansi::YELLOW),
        TraceStep::CacheMiss => palette.dim("cache miss"),
        TraceStep::StoreLoaded { preset_id } => palette.paint(format!("store loaded preset id={preset_id}"), ansi::BLUE),
        TraceStep::StoreMissing => palette.paint("store: no such preset", ansi::YELLOW),
        TraceStep::StoreFailed { message } => palette.paint(format!("store failed: {message}"), ansi::RED),
        TraceStep::Merged { stats } => palette.paint(
            format!(
                "merged (preset-only: {}, explicit-only: {}, overridden: {})",
                stats.preset_only, stats.explicit_only, stats.overridden
            ),
            ansi::CYAN,
        ),
        TraceStep::Validated => palette.paint("validation passed", ansi::GREEN),
        TraceStep::ValidationFailed { errors } => {
            let detail: Vec<String> = errors.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            palette.paint(format!("validation failed ({})", detail.join("; ")), ansi::RED)
        }
    }
}
