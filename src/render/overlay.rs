use anyhow::Result;
use opencv::core::{Mat, Point, Rect, Scalar};
use opencv::imgproc;

use crate::engine::FrameOutcome;
use crate::gesture::TrackingArea;

// BGR
fn lavender() -> Scalar {
    Scalar::new(250.0, 230.0, 230.0, 0.0)
}

fn green() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

/// トラッキング領域・FPS・ジェスチャー名・クリック中点をフレームに描く
pub fn draw_overlays(frame: &mut Mat, area: &TrackingArea, fps_label: &str, outcome: &FrameOutcome) -> Result<()> {
    let rect = Rect::new(
        area.left as i32,
        area.top as i32,
        (area.right - area.left) as i32,
        (area.bottom - area.top) as i32,
    );
    imgproc::rectangle(frame, rect, lavender(), 2, imgproc::LINE_8, 0)?;

    imgproc::put_text(
        frame,
        fps_label,
        Point::new(5, 20),
        imgproc::FONT_HERSHEY_SIMPLEX,
        0.8,
        green(),
        1,
        imgproc::LINE_8,
        false,
    )?;

    if let Some(gesture) = outcome.gesture {
        imgproc::put_text(
            frame,
            gesture.name(),
            Point::new(5, 50),
            imgproc::FONT_HERSHEY_SIMPLEX,
            0.8,
            green(),
            1,
            imgproc::LINE_8,
            false,
        )?;
    }

    if let Some(pinch) = outcome.pinch {
        let center = Point::new(pinch.midpoint.x as i32, pinch.midpoint.y as i32);
        let color = if outcome.action.is_some() {
            green()
        } else {
            Scalar::new(42.0, 42.0, 165.0, 0.0)
        };
        imgproc::circle(frame, center, 6, color, imgproc::FILLED, imgproc::LINE_8, 0)?;
    }

    Ok(())
}
