use linkup_mcp::app::{run, top_level_error_line};
use linkup_mcp::config::EnvironmentView;
use linkup_mcp::logging::init_tracing;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env = EnvironmentView::from_process();
    init_tracing(&env);

    match run(std::env::args_os(), &env).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", top_level_error_line(&error));
            ExitCode::FAILURE
        }
    }
}
