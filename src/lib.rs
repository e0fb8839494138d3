#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod attrs;
mod card;
mod constants;
mod device;
mod dom;
mod events;
mod frame;

pub use card::TiltCard;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

thread_local! {
    // Cards mounted from markup live as long as the page.
    static AUTO_MOUNTED: RefCell<Vec<TiltCard>> = const { RefCell::new(Vec::new()) };
}

/// Process-wide setup (panic hook, console logger). Safe to call repeatedly;
/// only the first call does anything.
#[wasm_bindgen]
pub fn init_tilt() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        log::debug!("[init] already initialized");
        return;
    }
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-web starting");
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_tilt();
    match mount_marked_cards() {
        Ok(n) => log::info!("[init] mounted {} card(s)", n),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

fn mount_marked_cards() -> anyhow::Result<usize> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let cards = dom::elements_matching(&document, constants::CARD_SELECTOR)?;
    let n = cards.len();
    AUTO_MOUNTED.with(|mounted| {
        let mut mounted = mounted.borrow_mut();
        for card in cards {
            mounted.push(TiltCard::mount(card, None));
        }
    });
    Ok(n)
}

/// Unmount every card mounted from markup.
#[wasm_bindgen]
pub fn unmount_all() {
    let cards = AUTO_MOUNTED.with(|mounted| std::mem::take(&mut *mounted.borrow_mut()));
    for card in &cards {
        card.unmount();
    }
}
