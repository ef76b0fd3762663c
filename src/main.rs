use clap::Parser;

mod commands;
mod output;
mod tty;

use commands::{annotate, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "propfix")]
#[command(version = VERSION)]
#[command(about = "Add placeholder props interfaces to untyped component declarations")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    annotate: annotate::AnnotateArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = cli.global;

    tty::status("propfix is scanning...");
    let result = annotate::run(cli.annotate);

    let exit_code = if global.json {
        let (json_result, exit_code) = output::map_cmd_result_to_json(result);
        if output::print_json_result(json_result).is_err() {
            return std::process::ExitCode::from(1);
        }
        exit_code
    } else {
        match result {
            Ok((data, exit_code)) => {
                if let Err(err) = output::print_text(&annotate::render_text(&data)) {
                    output::print_text_error(&err);
                    return std::process::ExitCode::from(1);
                }
                exit_code
            }
            Err(err) => {
                output::print_text_error(&err);
                output::exit_code_for_error(err.code)
            }
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
