// ==========================================
// 上传接口测试 - 文件名识别与状态码映射
// ==========================================
// 测试目标: 验证 UploadApi 的格式识别、错误映射与查询接口
// 覆盖范围: UploadApi + CompanyApi + EmployeeApi + AppState
// ==========================================


use std::sync::Arc;

use roster_import::api::{ApiError, UploadApi};
use roster_import::app::AppState;
use roster_import::importer::ImportError;
use roster_import::logging;
use roster_import::repository::RosterImportRepositoryImpl;

// ==========================================
// 测试辅助函数
// ==========================================

fn create_upload_api(db_path: &str) -> UploadApi {
    let store = Arc::new(
        RosterImportRepositoryImpl::new(db_path).expect("Failed to create import repo"),
    );
    UploadApi::new(store)
}

// ==========================================
// 测试用例 1: 文件名识别
// ==========================================

#[tokio::test]
async fn test_upload_rejects_unknown_extension() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_upload_api(&db_path);

    let result = api.upload_roster("roster.txt", b"whatever").await;

    match result {
        Err(err @ ApiError::UnsupportedFileFormat(_)) => {
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.error_code(), "UNSUPPORTED_FILE_FORMAT");
            assert!(
                err.to_string().contains("roster.txt"),
                "错误信息应包含原始文件名: {}",
                err
            );
        }
        other => panic!("应返回 UnsupportedFileFormat, 实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_extension_case_insensitive() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_upload_api(&db_path);

    let data = test_helpers::build_xlsx_bytes(
        &test_helpers::ROSTER_HEADERS,
        &[test_helpers::roster_row("Acme", "E001", "San", "Zhang")],
    );
    let resp = api
        .upload_roster("Roster.XLSX", &data)
        .await
        .expect("大写扩展名应被接受");

    assert!(resp.success);
    assert_eq!(resp.summary.expect("应包含汇总").imported_count, 1);
}

// ==========================================
// 测试用例 2: 导入响应与错误映射
// ==========================================

#[tokio::test]
async fn test_upload_roster_success_message() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_upload_api(&db_path);

    let data = test_helpers::build_csv_bytes(
        &test_helpers::ROSTER_HEADERS,
        &[
            test_helpers::roster_row("Acme", "E001", "San", "Zhang"),
            test_helpers::roster_row("Globex", "E002", "Si", "Li"),
        ],
    );
    let resp = api
        .upload_roster("roster.csv", &data)
        .await
        .expect("导入应该成功");

    assert!(resp.success);
    assert_eq!(resp.message, "成功导入 2 条员工记录");
    let summary = resp.summary.expect("成功响应应包含汇总");
    assert_eq!(summary.imported_count, 2);
    assert_eq!(summary.new_companies, 2);
}

#[tokio::test]
async fn test_upload_empty_file_maps_to_400() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_upload_api(&db_path);

    let data = test_helpers::build_csv_bytes(&test_helpers::ROSTER_HEADERS, &[]);
    let result = api.upload_roster("roster.csv", &data).await;

    match result {
        Err(err @ ApiError::ImportFailed(ImportError::EmptyInput)) => {
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.error_code(), "EMPTY_INPUT");
        }
        other => panic!("应返回 ImportFailed(EmptyInput), 实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_duplicate_maps_to_400() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_upload_api(&db_path);

    let data = test_helpers::build_csv_bytes(
        &test_helpers::ROSTER_HEADERS,
        &[test_helpers::roster_row("Acme", "E001", "San", "Zhang")],
    );
    api.upload_roster("roster.csv", &data)
        .await
        .expect("首次导入应该成功");

    let result = api.upload_roster("roster.csv", &data).await;
    match result {
        Err(err @ ApiError::ImportFailed(ImportError::DuplicateEmployeeRecords { .. })) => {
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.error_code(), "DUPLICATE_EMPLOYEE_RECORDS");
        }
        other => panic!("应返回 ImportFailed(DuplicateEmployeeRecords), 实际: {:?}", other),
    }
}

// ==========================================
// 测试用例 3: AppState 装配与查询接口
// ==========================================

#[tokio::test]
async fn test_app_state_full_flow() {
    logging::init_test();

    println!("\n=== 集成测试：AppState 完整流程 ===");

    // 步骤 1: AppState 自行建库建表
    let temp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_file.path().to_str().unwrap().to_string();
    let app_state = AppState::new(db_path.clone()).expect("Failed to create AppState");
    assert_eq!(app_state.get_db_path(), db_path);
    println!("✓ 步骤 1: AppState 初始化完成");

    // 步骤 2: 通过上传接口导入（员工号故意乱序）
    let data = test_helpers::build_csv_bytes(
        &test_helpers::ROSTER_HEADERS,
        &[
            test_helpers::roster_row("Globex", "9", "San", "Zhang"),
            test_helpers::roster_row("Acme", "10", "Si", "Li"),
            test_helpers::roster_row("Acme", "A1", "Wu", "Wang"),
        ],
    );
    let resp = app_state
        .upload_api
        .upload_roster("roster.csv", &data)
        .await
        .expect("导入应该成功");
    assert_eq!(resp.summary.expect("应包含汇总").imported_count, 3);
    println!("✓ 步骤 2: 上传导入 3 条");

    // 步骤 3: 公司列表按存储顺序返回（首见 Globex 在前）
    let companies = app_state
        .company_api
        .list_companies()
        .expect("Failed to list companies");
    assert_eq!(companies.len(), 2);
    assert_eq!(companies[0].company_name, "Globex");
    assert_eq!(companies[1].company_name, "Acme");
    println!("✓ 步骤 3: 公司列表顺序正确");

    // 步骤 4: 员工列表按员工号字典序返回（"10" 排在 "9" 前）
    let employees = app_state
        .employee_api
        .list_employees()
        .expect("Failed to list employees");
    let ids: Vec<&str> = employees
        .iter()
        .map(|e| e.employee_id.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(ids, vec!["10", "9", "A1"], "员工号应按字典序排序");
    println!("✓ 步骤 4: 员工列表字典序正确");
}
