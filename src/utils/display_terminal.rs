//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정을 박스 제목과 단계 표시로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              CACHE SERVICE BACKEND               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting to Redis
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Connecting to Redis (connected)
/// ```
pub fn print_step_complete(step: u8, description: &str, status: &str) {
    println!("✓ Step {}: {} ({})", step, description, status);
}

/// 서브 항목을 트리 형태로 표시합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}
