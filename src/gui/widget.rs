use druid::piet::InterpolationMode;
use druid::widget::prelude::*;
use druid::{ImageBuf, Widget};

/// Shows a fixed, pre-rendered frame. Input is ignored; the window only
/// needs to stay open until the user closes it.
pub struct FrameWidget {
    image: ImageBuf,
    size: Size,
}

impl FrameWidget {
    pub fn new(image: ImageBuf, size: impl Into<Size>) -> Self {
        Self {
            image,
            size: size.into(),
        }
    }
}

impl Widget<()> for FrameWidget {
    fn event(&mut self, _ctx: &mut EventCtx, _event: &Event, _data: &mut (), _env: &Env) {}

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, _event: &LifeCycle, _data: &(), _env: &Env) {}

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &(), _new_data: &(), _env: &Env) {}

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &(),
        _env: &Env,
    ) -> Size {
        bc.constrain(self.size)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _: &(), _env: &Env) {
        if self.image.width() == 0 || self.image.height() == 0 {
            return;
        }
        // blit 1:1 at the image's own size
        let rect = self.image.size().to_rect();
        let ctx_image = self.image.to_image(ctx.render_ctx);
        ctx.draw_image(&ctx_image, rect, InterpolationMode::NearestNeighbor);
    }
}
