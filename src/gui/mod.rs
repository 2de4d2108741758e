use std::sync::Arc;

use druid::piet::ImageFormat;
use druid::{AppLauncher, ImageBuf, WindowDesc};
use log::{debug, info};

use crate::app::{DisplayError, Event, Surface};
use crate::painter::FrameBuffer;

pub mod widget;

use widget::FrameWidget;

pub fn convert_image(frame: FrameBuffer) -> ImageBuf {
    let width = frame.width();
    let height = frame.height();
    let raw: Arc<[u8]> = frame.into_raw().into();

    ImageBuf::from_raw(raw, ImageFormat::Grayscale, width, height)
}

struct WindowSettings {
    title: String,
    width: usize,
    height: usize,
}

/// Druid-backed surface. The platform event loop runs inside the first
/// `poll_event` call and only returns once the window has been closed.
#[derive(Default)]
pub struct DruidSurface {
    window: Option<WindowSettings>,
    image: Option<ImageBuf>,
    launched: bool,
}

impl DruidSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn launch(&mut self) -> Result<(), DisplayError> {
        let settings = self
            .window
            .as_ref()
            .ok_or_else(|| DisplayError::WindowCreation("window was never opened".to_string()))?;
        let image = self.image.take().unwrap_or_else(ImageBuf::empty);
        let size = (settings.width as f64, settings.height as f64);

        let desc = WindowDesc::new(FrameWidget::new(image, size))
            .title(settings.title.clone())
            .window_size(size)
            .resizable(false);

        info!(
            "launching window {:?} ({}x{})",
            settings.title, settings.width, settings.height
        );
        AppLauncher::with_window(desc)
            .launch(())
            .map_err(|e| DisplayError::WindowCreation(e.to_string()))
    }
}

impl Surface for DruidSurface {
    fn open(&mut self, title: &str, width: usize, height: usize) -> Result<(), DisplayError> {
        if width == 0 || height == 0 {
            return Err(DisplayError::WindowCreation(format!(
                "invalid window size {}x{}",
                width, height
            )));
        }
        self.window = Some(WindowSettings {
            title: title.to_string(),
            width,
            height,
        });
        Ok(())
    }

    fn present(&mut self, frame: FrameBuffer) -> Result<(), DisplayError> {
        debug!("presenting {}x{} frame", frame.width(), frame.height());
        self.image = Some(convert_image(frame));
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Option<Event>, DisplayError> {
        if !self.launched {
            self.launch()?;
            self.launched = true;
        }
        Ok(Some(Event::Quit))
    }

    fn close(&mut self) {
        self.window = None;
        self.image = None;
    }
}
