//! soritype - 터미널 타자기 대화 재생기

use soritype::config::load_config;
use soritype::dialogue::{load_script, DialogueController, DialoguePhase, TickTimer};
use soritype::ui::TerminalListener;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// 입력 스레드가 보내는 명령
enum Command {
    /// 다음 대사 (출력 중이면 스킵)
    Advance,
    /// 현재 대사 즉시 완성
    Skip,
    Quit,
}

/// 예약된 tick이 없을 때 입력 대기 시간
const IDLE_WAIT: Duration = Duration::from_millis(500);

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(script_path) = std::env::args().nth(1) else {
        eprintln!("사용법: soritype <대본.json>");
        eprintln!("  Enter: 다음 대사 / s + Enter: 스킵 / q + Enter: 종료");
        std::process::exit(2);
    };

    // 설정 로드
    let config = load_config();

    let script = match load_script(Path::new(&script_path)) {
        Ok(script) => script,
        Err(e) => {
            log::error!("대본 로드 실패: {}", e);
            eprintln!("대본 로드 실패: {}", e);
            std::process::exit(1);
        }
    };

    // 입력 스레드 — 키 입력을 명령으로 바꿔 메인 루프에 전송
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let cmd = match line.trim() {
                "q" => Command::Quit,
                "s" => Command::Skip,
                _ => Command::Advance,
            };
            if cmd_tx.send(cmd).is_err() {
                break;
            }
        }
        log::info!("입력 스레드 종료");
    });

    let mut controller = DialogueController::new(config, TerminalListener::new(io::stdout()));
    controller.bind_script(Arc::new(script));
    if controller.phase() == DialoguePhase::NotStarted {
        // 빈 대본 (경고는 이미 출력됨)
        std::process::exit(1);
    }

    // 메인 루프 — tick, skip, advance는 모두 이 스레드에서만 실행
    let mut timer = TickTimer::new();
    while !controller.is_finished() {
        let now = Instant::now();
        timer.sync(controller.timer_epoch(), controller.tick_interval(), now);
        let wait = timer.remaining(now).unwrap_or(IDLE_WAIT);

        match cmd_rx.recv_timeout(wait) {
            Ok(Command::Advance) => controller.advance(),
            Ok(Command::Skip) => controller.skip(),
            Ok(Command::Quit) => break,
            Err(RecvTimeoutError::Timeout) => {
                if timer.poll(Instant::now()) {
                    controller.tick();
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("입력이 닫혀 종료합니다");
                break;
            }
        }
    }
}
