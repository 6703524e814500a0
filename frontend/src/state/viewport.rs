use leptos::*;

/// Width assumed when no window is observable (host rendering).
pub const FALLBACK_WIDTH_PX: u32 = 1280;

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    width: Signal<u32>,
}

impl Viewport {
    pub fn from_signal(width: impl Into<Signal<u32>>) -> Self {
        Self {
            width: width.into(),
        }
    }

    pub fn fixed(width: u32) -> Self {
        Self::from_signal(Signal::derive(move || width))
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }
}

pub fn provide_viewport() -> Viewport {
    let (width, set_width) = create_signal(FALLBACK_WIDTH_PX);
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = observe_window_width(set_width) {
            log::warn!("viewport observer unavailable: {err}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_width;

    let viewport = Viewport::from_signal(width);
    provide_context(viewport);
    viewport
}

pub fn use_viewport() -> Viewport {
    use_context::<Viewport>().unwrap_or_else(|| Viewport::fixed(FALLBACK_WIDTH_PX))
}

#[cfg(target_arch = "wasm32")]
fn observe_window_width(set_width: WriteSignal<u32>) -> Result<(), crate::error::FrontendError> {
    use crate::error::FrontendError;
    use wasm_bindgen::{closure::Closure, JsCast};

    let window = web_sys::window().ok_or(FrontendError::NoWindow)?;
    set_width.set(read_width(&window)?);

    let observed = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || match read_width(&observed) {
        Ok(width) => set_width.set(width),
        Err(err) => log::warn!("failed to read viewport width: {err}"),
    });
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(FrontendError::dom)?;
    // Lives as long as the app.
    on_resize.forget();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn read_width(window: &web_sys::Window) -> Result<u32, crate::error::FrontendError> {
    window
        .inner_width()
        .map_err(crate::error::FrontendError::dom)?
        .as_f64()
        .map(|width| width.max(0.0) as u32)
        .ok_or_else(|| crate::error::FrontendError::Dom("innerWidth is not a number".into()))
}
