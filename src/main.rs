use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dyehouse_requisition_toolbox::{
    app::{self, AppError, Session},
    config, i18n,
    requisition::{
        self,
        document::RequisitionDocument,
        report::{format_money, format_optional_decimal, format_subunit, render_text_report},
    },
};

/// 염색 약품 요청서 CLI.
#[derive(Debug, Parser)]
#[command(name = "dyehouse_requisition_toolbox_cli", version, about)]
struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,
    /// 시작할 때 열 요청서 파일
    #[arg(long)]
    file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 한 행의 사용량과 금액을 계산한다
    Calc {
        /// dosing [g/l]
        #[arg(long, conflicts_with = "shade")]
        dosing: Option<f64>,
        /// shade [%]
        #[arg(long)]
        shade: Option<f64>,
        /// 총 물량 [L]
        #[arg(long)]
        water: Option<f64>,
        /// 원단 중량 [kg]
        #[arg(long)]
        fabric: Option<f64>,
        /// kg 단가
        #[arg(long)]
        price: Option<f64>,
    },
    /// 저장된 요청서의 보고서를 출력한다
    Report { file: PathBuf },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default_at(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    match cli.command {
        Some(Command::Calc {
            dosing,
            shade,
            water,
            fabric,
            price,
        }) => {
            let qty_kg = requisition::derive_quantity_kg(dosing, shade, water, fabric);
            let qty = requisition::decompose_to_subunits(qty_kg);
            let costing = requisition::compute_costing(&qty, price);
            println!(
                "quantity_kg={} kg={} gm={} mg={} costing={} {}",
                format_optional_decimal(qty_kg, 6),
                format_subunit(qty.kg),
                format_subunit(qty.gm),
                format_subunit(qty.mg),
                format_money(costing),
                cfg.currency
            );
        }
        Some(Command::Report { file }) => {
            let doc = RequisitionDocument::load_from(&file)?;
            print!("{}", render_text_report(&doc, &tr, &cfg.currency));
        }
        None => {
            let mut session = match cli.file {
                Some(path) => Session::open(path)?,
                None => Session::default(),
            };
            app::run(&mut cfg, &cli.config, &mut tr, &mut session)?;
        }
    }
    Ok(())
}
