use clap::Parser;
use piping_boq_toolbox::{app, config, ui_cli::Cli};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    app::run(&cli, &cfg)
}
