use crate::hand::LandmarkSnapshot;

/// 追跡領域の拡大率（前フレームの手の外接矩形に対して）
pub const ROI_EXPAND: f32 = 1.5;

/// BBox（ピクセル座標）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// クロップ領域（正規化座標 0.0〜1.0）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRegion {
    pub fn from_bbox(bbox: &BBox, frame_w: u32, frame_h: u32) -> Self {
        let fw = frame_w as f32;
        let fh = frame_h as f32;
        Self {
            x: bbox.x / fw,
            y: bbox.y / fh,
            width: bbox.width / fw,
            height: bbox.height / fh,
        }
    }
}

/// ランドマークの外接矩形。有限な点が2個未満なら None
pub fn bbox_from_snapshot(snapshot: &LandmarkSnapshot) -> Option<BBox> {
    let mut count = 0;
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for p in snapshot.points().iter().filter(|p| p.is_finite()) {
        count += 1;
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    if count < 2 {
        return None;
    }

    Some(BBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

/// 次フレームで推論する正方形の領域
///
/// - 中心を保持して長辺 × expand の正方形に拡張
/// - フレーム境界にクリップ
/// - 1ピクセル未満になったら None
pub fn tracking_roi(bbox: &BBox, frame_w: u32, frame_h: u32, expand: f32) -> Option<BBox> {
    let cx = bbox.x + bbox.width / 2.0;
    let cy = bbox.y + bbox.height / 2.0;
    let side = bbox.width.max(bbox.height) * expand;

    let fw = frame_w as f32;
    let fh = frame_h as f32;
    let x0 = (cx - side / 2.0).max(0.0);
    let y0 = (cy - side / 2.0).max(0.0);
    let x1 = (cx + side / 2.0).min(fw);
    let y1 = (cy + side / 2.0).min(fh);

    if x1 - x0 < 1.0 || y1 - y0 < 1.0 {
        return None;
    }

    Some(BBox {
        x: x0.floor(),
        y: y0.floor(),
        width: (x1 - x0.floor()).floor(),
        height: (y1 - y0.floor()).floor(),
    })
}

/// クロップ画像内の正規化座標をフレーム全体の正規化座標に変換
pub fn remap_to_frame(points: &[(f32, f32)], crop: &CropRegion) -> Vec<(f32, f32)> {
    points
        .iter()
        .map(|&(x, y)| (crop.x + x * crop.width, crop.y + y * crop.height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Point;

    #[test]
    fn test_bbox_from_snapshot() {
        let snapshot = LandmarkSnapshot::from_points(vec![
            Point::new(100.0, 50.0),
            Point::new(200.0, 150.0),
            Point::new(150.0, 80.0),
        ]);
        let bbox = bbox_from_snapshot(&snapshot).unwrap();
        assert_eq!(bbox, BBox { x: 100.0, y: 50.0, width: 100.0, height: 100.0 });
    }

    #[test]
    fn test_bbox_requires_two_points() {
        assert!(bbox_from_snapshot(&LandmarkSnapshot::empty()).is_none());
        let single = LandmarkSnapshot::from_points(vec![Point::new(1.0, 1.0)]);
        assert!(bbox_from_snapshot(&single).is_none());
    }

    #[test]
    fn test_bbox_ignores_non_finite_points() {
        let snapshot = LandmarkSnapshot::from_points(vec![
            Point::new(100.0, 50.0),
            Point::new(f32::NAN, 500.0),
            Point::new(200.0, 150.0),
        ]);
        let bbox = bbox_from_snapshot(&snapshot).unwrap();
        assert_eq!(bbox, BBox { x: 100.0, y: 50.0, width: 100.0, height: 100.0 });

        let one_finite = LandmarkSnapshot::from_points(vec![
            Point::new(10.0, 10.0),
            Point::new(f32::INFINITY, 0.0),
        ]);
        assert!(bbox_from_snapshot(&one_finite).is_none());
    }

    #[test]
    fn test_tracking_roi_square_and_centered() {
        let bbox = BBox { x: 200.0, y: 150.0, width: 100.0, height: 60.0 };
        let roi = tracking_roi(&bbox, 640, 480, 1.5).unwrap();
        assert_eq!(roi.width, 150.0);
        assert_eq!(roi.height, 150.0);
        // 中心 (250, 180)
        assert_eq!(roi.x, 175.0);
        assert_eq!(roi.y, 105.0);
    }

    #[test]
    fn test_tracking_roi_clipped_to_frame() {
        let bbox = BBox { x: 0.0, y: 400.0, width: 80.0, height: 80.0 };
        let roi = tracking_roi(&bbox, 640, 480, 1.5).unwrap();
        assert_eq!(roi.x, 0.0);
        assert!(roi.y + roi.height <= 480.0);
        assert!(roi.x + roi.width <= 640.0);
    }

    #[test]
    fn test_tracking_roi_outside_frame() {
        let bbox = BBox { x: 700.0, y: 500.0, width: 10.0, height: 10.0 };
        assert!(tracking_roi(&bbox, 640, 480, 1.5).is_none());
    }

    #[test]
    fn test_remap_to_frame() {
        let crop = CropRegion { x: 0.25, y: 0.1, width: 0.5, height: 0.8 };
        let remapped = remap_to_frame(&[(0.5, 0.5), (0.0, 0.0)], &crop);
        assert!((remapped[0].0 - 0.5).abs() < 1e-6);
        assert!((remapped[0].1 - 0.5).abs() < 1e-6);
        assert!((remapped[1].0 - 0.25).abs() < 1e-6);
        assert!((remapped[1].1 - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_crop_region_from_bbox() {
        let bbox = BBox { x: 160.0, y: 120.0, width: 320.0, height: 240.0 };
        let crop = CropRegion::from_bbox(&bbox, 640, 480);
        assert_eq!(crop, CropRegion { x: 0.25, y: 0.25, width: 0.5, height: 0.5 });
    }
}
