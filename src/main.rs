mod debug_report;

use presetta::{
    DurationContext, PRESET_KEY, PackageRegistry, ParamValue, ParameterSet, Preset, PresetResolver, PresetStore,
    ResolveError, parse_duration, validate_for_context,
};
use std::collections::HashMap;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match config.mode {
        Mode::Duration { input } => {
            let parsed = parse_duration(&input);
            let validation = validate_for_context(parsed.value, config.context);
            debug_report::print_duration(&parsed, config.context, &validation, config.color);
            if parsed.error.is_some() {
                std::process::exit(1);
            }
        }
        Mode::Resolve { presets_path, name, params } => {
            let store = match JsonPresetStore::load(&presets_path) {
                Ok(store) => store,
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(2);
                }
            };

            let mut tag: ParameterSet = params.into_iter().collect();
            tag.insert(PRESET_KEY.to_string(), ParamValue::Str(name));

            let resolver = PresetResolver::new(Box::new(store), PackageRegistry::all());
            let (resolved, trace) = resolver.resolve_parameters_traced(&tag);
            debug_report::print_resolution(&resolved, &trace, config.color);
        }
    }
}

/// File-backed preset store for the CLI: a JSON array of presets
/// (`[{"id":1,"name":"thumbnail","parameters":{"width":100}}]`).
struct JsonPresetStore {
    presets: HashMap<String, Preset>,
}

impl JsonPresetStore {
    fn load(path: &str) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path).map_err(|err| format!("error: cannot read {path}: {err}"))?;
        let presets: Vec<Preset> =
            serde_json::from_str(&raw).map_err(|err| format!("error: invalid preset file {path}: {err}"))?;
        Ok(JsonPresetStore { presets: presets.into_iter().map(|p| (p.name.clone(), p)).collect() })
    }
}

impl PresetStore for JsonPresetStore {
    fn get_preset(&self, name: &str) -> Result<Option<Preset>, ResolveError> {
        Ok(self.presets.get(name).cloned())
    }
}

enum Mode {
    Duration { input: String },
    Resolve { presets_path: String, name: String, params: Vec<(String, ParamValue)> },
}

struct CliConfig {
    mode: Mode,
    context: DurationContext,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut presets_path: Option<String> = None;
    let mut resolve: Option<String> = None;
    let mut params: Vec<(String, ParamValue)> = Vec::new();
    let mut context = DurationContext::General;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("presetta {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--context" => {
                let value = args.next().ok_or_else(|| "error: --context expects a value".to_string())?;
                context = value.parse().unwrap_or_default();
            }
            "--presets" => {
                let value = args.next().ok_or_else(|| "error: --presets expects a file path".to_string())?;
                presets_path = Some(value);
            }
            "--resolve" => {
                let value = args.next().ok_or_else(|| "error: --resolve expects a preset name".to_string())?;
                resolve = Some(value);
            }
            "--param" | "-p" => {
                let value = args.next().ok_or_else(|| "error: --param expects key=value".to_string())?;
                params.push(parse_param(&value)?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown flag {arg}\nRun with --help for usage."));
            }
            _ => {
                if input.is_some() {
                    return Err("error: duration input provided multiple times".to_string());
                }
                input = Some(arg);
            }
        }
    }

    let mode = match (resolve, input) {
        (Some(name), None) => {
            let presets_path =
                presets_path.ok_or_else(|| "error: --resolve requires --presets <file.json>".to_string())?;
            Mode::Resolve { presets_path, name, params }
        }
        (None, Some(input)) => Mode::Duration { input },
        (Some(_), Some(_)) => return Err("error: pass either a duration or --resolve, not both".to_string()),
        (None, None) => return Err("error: nothing to do\nRun with --help for usage.".to_string()),
    };

    Ok(CliConfig { mode, context, color })
}

/// `key=value`; the value is parsed as JSON when possible ("90" becomes an
/// integer) and kept as a plain string otherwise ("cover").
fn parse_param(raw: &str) -> Result<(String, ParamValue), String> {
    let (key, value) = raw.split_once('=').ok_or_else(|| format!("error: --param {raw} is not key=value"))?;
    if key.is_empty() {
        return Err(format!("error: --param {raw} has an empty key"));
    }
    let parsed = serde_json::from_str::<ParamValue>(value).unwrap_or_else(|_| ParamValue::Str(value.to_string()));
    Ok((key.to_string(), parsed))
}

fn print_help() {
    println!(
        "presetta {}\n\
         \n\
         USAGE:\n\
         \x20 presetta [OPTIONS] \"<duration expression>\"\n\
         \x20 presetta [OPTIONS] --presets <file.json> --resolve <name> [--param k=v]...\n\
         \n\
         OPTIONS:\n\
         \x20 --context <cache|timeout|audit|general>  validation context for durations\n\
         \x20 --presets <file>                         JSON preset file for --resolve\n\
         \x20 --resolve <name>                         resolve a preset by name\n\
         \x20 -p, --param <k=v>                        explicit call-time parameter (repeatable)\n\
         \x20 --color / --no-color                     force ANSI colors on/off\n\
         \x20 -h, --help                               print this help\n\
         \x20 -V, --version                            print version\n\
         \n\
         EXAMPLES:\n\
         \x20 presetta \"1 hour 30 minutes\"\n\
         \x20 presetta --context timeout \"2 hours\"\n\
         \x20 presetta --presets presets.json --resolve thumbnail -p quality=90",
        env!("CARGO_PKG_VERSION")
    );
}
