use glam::*;

use crate::Error;

/// The minimum number of vertices of a [`Polygon`].
pub const MIN_POLYGON_VERTICES: usize = 3;

/// An axis-aligned box in screen space, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenBox {
    /// Create a new box from its bounds.
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a box spanning two corners in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    /// Create the bounding box of a set of points.
    ///
    /// Returns [`None`] if `points` is empty.
    pub fn bounding(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Self::new(*first, *first), |bounds, p| {
                    Self::new(bounds.min.min(*p), bounds.max.max(*p))
                }),
        )
    }

    /// Check if the box contains a point.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// The four corners, clockwise on screen starting from the top left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            vec2(self.max.x, self.min.y),
            self.max,
            vec2(self.min.x, self.max.y),
        ]
    }
}

/// A closed polygon in screen space.
///
/// The last vertex connects back to the first. Self-intersection is not validated; membership
/// follows the even-odd rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    bounds: ScreenBox,
}

impl Polygon {
    /// Create a new polygon.
    ///
    /// Returns [`Error::DegenerateGesture`] if there are fewer than [`MIN_POLYGON_VERTICES`].
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, Error> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(Error::DegenerateGesture {
                vertex_count: vertices.len(),
            });
        }

        let bounds = ScreenBox::bounding(&vertices).ok_or(Error::DegenerateGesture {
            vertex_count: 0,
        })?;

        Ok(Self { vertices, bounds })
    }

    /// Get the vertices.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Get the bounding box of the vertices.
    pub fn bounds(&self) -> &ScreenBox {
        &self.bounds
    }

    /// Check if the polygon contains a point.
    ///
    /// Points outside [`Polygon::bounds`] are rejected before the ray cast.
    pub fn contains(&self, p: Vec2) -> bool {
        self.bounds.contains(p) && self.contains_unfiltered(p)
    }

    /// Check if the polygon contains a point with the ray cast only.
    pub fn contains_unfiltered(&self, p: Vec2) -> bool {
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for (i, vi) in self.vertices.iter().enumerate() {
            let vj = self.vertices[j];
            // Half-open in y, so a vertex shared by two edges is crossed once.
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

impl From<ScreenBox> for Polygon {
    fn from(screen_box: ScreenBox) -> Self {
        Self {
            vertices: screen_box.corners().to_vec(),
            bounds: screen_box,
        }
    }
}

/// A screen space selection region.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    Box(ScreenBox),
    Polygon(Polygon),
}

impl Region {
    /// Check if the region contains a point.
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Self::Box(b) => b.contains(p),
            Self::Polygon(polygon) => polygon.contains(p),
        }
    }

    /// Get the bounding box of the region.
    pub fn bounds(&self) -> ScreenBox {
        match self {
            Self::Box(b) => *b,
            Self::Polygon(polygon) => *polygon.bounds(),
        }
    }

    /// Convert the region to a polygon.
    pub fn to_polygon(&self) -> Polygon {
        match self {
            Self::Box(b) => Polygon::from(*b),
            Self::Polygon(polygon) => polygon.clone(),
        }
    }
}

impl From<ScreenBox> for Region {
    fn from(screen_box: ScreenBox) -> Self {
        Self::Box(screen_box)
    }
}

impl From<Polygon> for Region {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}
