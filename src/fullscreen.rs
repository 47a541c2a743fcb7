use log::{info, warn};

/// Something that can switch the render surface in and out of fullscreen.
pub trait Fullscreen {
    fn is_fullscreen(&self) -> bool;

    fn enter(&mut self) -> anyhow::Result<()>;

    fn leave(&mut self) -> anyhow::Result<()>;

    fn toggle(&mut self) -> anyhow::Result<()> {
        if self.is_fullscreen() {
            info!("leave full");
            self.leave()
        } else {
            info!("go full");
            self.enter()
        }
    }
}

/// Native windows are created once and cannot change mode afterwards.
/// Start with `--borderless` for a window that covers the screen.
#[derive(Debug, Default)]
pub struct FixedWindow;

impl Fullscreen for FixedWindow {
    fn is_fullscreen(&self) -> bool {
        false
    }

    fn enter(&mut self) -> anyhow::Result<()> {
        warn!("Fullscreen switching is not available for native windows, start with --borderless");
        Ok(())
    }

    fn leave(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::CanvasFullscreen;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::Fullscreen;
    use anyhow::anyhow;
    use web_sys::{Document, HtmlCanvasElement};

    /// Puts the render canvas in fullscreen through the DOM fullscreen API.
    pub struct CanvasFullscreen {
        pub canvas: HtmlCanvasElement,
    }

    fn document() -> anyhow::Result<Document> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| anyhow!("no document"))
    }

    impl Fullscreen for CanvasFullscreen {
        fn is_fullscreen(&self) -> bool {
            document()
                .map(|d| d.fullscreen_element().is_some())
                .unwrap_or(false)
        }

        fn enter(&mut self) -> anyhow::Result<()> {
            self.canvas
                .request_fullscreen()
                .map_err(|e| anyhow!("requestFullscreen failed: {:?}", e))
        }

        fn leave(&mut self) -> anyhow::Result<()> {
            document()?.exit_fullscreen();
            Ok(())
        }
    }
}
