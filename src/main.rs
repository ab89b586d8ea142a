use std::process::ExitCode;
use symbol_recolor::args::{Args, Mode};
use symbol_recolor::gui::dioxus_app::run_gui;
use symbol_recolor::recolor::{ScriptedInteraction, run_session};

fn main() -> ExitCode {
    let Some(args) = Args::parse() else {
        return ExitCode::SUCCESS;
    };

    // RUST_LOG wins over the --debug default
    let default_level = if args.debug_mode { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();

    match args.mode {
        Mode::Gui => {
            println!(
                "🚀 Launching Symbol Recolor GUI on {}...",
                args.config.input_path.display()
            );
            // Failed or cancelled sessions exit with 1
            let code = run_gui(args.config);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
        Mode::Headless { selection, color } => {
            println!("🎨 Headless recolor of {} using {}", args.config.input_path.display(), selection);
            let mut ui = ScriptedInteraction::new(Some(selection), color);
            match run_session(&args.config, &mut ui) {
                Ok(summary) => {
                    println!("✅ {}", summary.describe());
                    ExitCode::SUCCESS
                }
                Err(e) if e.is_user_cancellation() => {
                    println!("🚫 Cancelled: {}", e);
                    ExitCode::FAILURE
                }
                Err(e) => {
                    println!("❌ {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
