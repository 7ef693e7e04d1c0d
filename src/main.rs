// ==========================================
// WoolTracer - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust + SQLite
// 系统定位: 羊毛供应链溯源系统
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use wool_tracer::app::{get_default_db_path, AppState};

#[cfg(feature = "tauri-app")]
fn main() {
    use wool_tracer::app::tauri_commands::*;

    // 初始化日志系统
    wool_tracer::logging::init();

    tracing::info!("==================================================");
    tracing::info!("WoolTracer - 羊毛供应链溯源系统");
    tracing::info!("系统版本: {}", wool_tracer::VERSION);
    tracing::info!("==================================================");

    // 获取数据库路径
    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path);

    // 创建AppState
    tracing::info!("正在初始化AppState...");
    let app_state = AppState::new(db_path).expect("无法初始化AppState");

    tracing::info!("AppState初始化成功");
    tracing::info!("启动Tauri应用...");

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 牧场相关命令 (4个)
            // ==========================================
            list_farms,
            search_farms,
            get_farm_detail,
            create_farm,
            // ==========================================
            // 批次相关命令 (6个)
            // ==========================================
            list_batches,
            search_batches,
            get_batch_detail,
            list_batches_by_farm,
            create_batch,
            update_batch_status,
            // ==========================================
            // 设施相关命令 (1个)
            // ==========================================
            list_facilities,
            // ==========================================
            // 看板相关命令 (2个)
            // ==========================================
            get_analytics_summary,
            list_recent_updates,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("WoolTracer - 羊毛供应链溯源系统");
    println!("系统版本: {}", wool_tracer::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("或者使用库模式:");
    println!("use wool_tracer::app::AppState;");
    println!();
    println!("种子数据: cargo run --bin seed_demo_db");
}
