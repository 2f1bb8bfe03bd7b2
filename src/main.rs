// ==========================================
// 员工花名册导入系统 - 命令行入口
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 表格批量解析与入库
// ==========================================

use std::error::Error;
use std::path::Path;

use roster_import::app::{get_default_db_path, AppState};
use roster_import::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", roster_import::APP_NAME);
    tracing::info!("系统版本: {}", roster_import::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let command = match args.next() {
        Some(c) => c,
        None => {
            print_usage();
            return Ok(());
        }
    };

    // 获取数据库路径
    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path);

    let app_state = AppState::new(db_path)?;

    match command.as_str() {
        "upload" => {
            let file_path = args.next().ok_or("用法: roster-import upload <文件路径>")?;
            run_upload(&app_state, &file_path).await;
        }
        "companies" => {
            run_list_companies(&app_state)?;
        }
        "employees" => {
            run_list_employees(&app_state)?;
        }
        other => {
            eprintln!("未知命令: {}", other);
            print_usage();
        }
    }

    Ok(())
}

/// 执行花名册导入并打印结果摘要
async fn run_upload(app_state: &AppState, file_path: &str) {
    let data = match std::fs::read(file_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("无法读取文件 {}: {}", file_path, e);
            std::process::exit(1);
        }
    };

    let file_name = Path::new(file_path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.to_string());

    match app_state.upload_api.upload_roster(&file_name, &data).await {
        Ok(resp) => {
            println!("{}", resp.message);
            if let Some(summary) = resp.summary {
                println!("批次: {}", summary.batch_id);
                println!(
                    "总行数: {} | 导入: {} | 跳过: {} | 新建公司: {}",
                    summary.total_rows,
                    summary.imported_count,
                    summary.skipped_rows,
                    summary.new_companies
                );
                println!("耗时: {} ms", summary.elapsed_ms);
            }
        }
        Err(e) => {
            eprintln!("导入失败 [{}] {}: {}", e.status_code(), e.error_code(), e);
            std::process::exit(1);
        }
    }
}

fn run_list_companies(app_state: &AppState) -> Result<(), Box<dyn Error>> {
    let companies = app_state.company_api.list_companies()?;
    println!("共 {} 家公司", companies.len());
    for company in companies {
        println!("{}\t{}", company.id, company.company_name);
    }
    Ok(())
}

fn run_list_employees(app_state: &AppState) -> Result<(), Box<dyn Error>> {
    let employees = app_state.employee_api.list_employees()?;
    println!("共 {} 名员工", employees.len());
    for employee in employees {
        println!(
            "{}\t{} {}\tcompany_id={}",
            employee.employee_id.as_deref().unwrap_or("-"),
            employee.first_name.as_deref().unwrap_or(""),
            employee.last_name.as_deref().unwrap_or(""),
            employee.company_id
        );
    }
    Ok(())
}

fn print_usage() {
    println!("用法:");
    println!("  roster-import upload <文件路径>    导入员工花名册 (.xlsx/.xls/.csv)");
    println!("  roster-import companies            列出全部公司");
    println!("  roster-import employees            列出全部员工");
    println!();
    println!("数据库路径可通过环境变量 ROSTER_IMPORT_DB_PATH 覆盖");
}
