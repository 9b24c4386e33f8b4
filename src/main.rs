use clap::{Parser, Subcommand};

use unit_converter_toolbox::{app, config, conversion};

#[derive(Parser)]
#[command(name = "unit_converter_cli")]
#[command(about = "Category-based unit converter", long_about = None)]
struct Cli {
    /// 설정된 소수 자릿수를 덮어쓴다 (0~8)
    #[arg(long)]
    decimals: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 한 번만 변환하고 종료한다
    Convert {
        /// 카테고리 이름 (예: Length)
        category: String,

        /// 변환할 값
        value: String,

        /// 입력 단위 라벨 (예: "meter (m)")
        from: String,

        /// 변환 단위 라벨 (예: "foot (ft)")
        to: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    if let Some(decimals) = cli.decimals {
        cfg.decimals = decimals;
    }
    match cli.command {
        Some(Commands::Convert {
            category,
            value,
            from,
            to,
        }) => {
            println!(
                "{}",
                conversion::convert(&value, &category, &from, &to, cfg.decimals)
            );
        }
        None => app::run(&mut cfg)?,
    }
    Ok(())
}
