//! Geometric primitives for shape placement.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Transform`] - Placement of a shape: center, size and rotation
//!
//! # Coordinate System
//!
//! Coordinates follow SVG: origin at the top-left corner, X grows to the
//! right and Y grows downward.

/// Extents below this value are treated as zero when scaling.
const EPSILON: f32 = 1e-6;

/// A 2D point in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use draftboard_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Converts a center point and size into a bounds rectangle
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Width and height of an element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// A rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Converts bounds to a size
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns the four corners, clockwise from the top-left.
    pub fn corners(self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// Merges two bounds into the smallest bounds containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use draftboard_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let b = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = a.merge(&b);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Placement of a shape on the canvas.
///
/// The position is the center of the shape. Rotation is in degrees,
/// clockwise, around the center.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    position: Point,
    size: Size,
    rotation: f32,
}

impl Transform {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            rotation: 0.0,
        }
    }

    /// Sets the rotation in degrees (builder style).
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Returns the unrotated bounds of the shape.
    pub fn bounds(&self) -> Bounds {
        self.position.to_bounds(self.size)
    }

    /// Maps this transform from `old_bounds` into `new_bounds`.
    ///
    /// The center is moved relative to the bounds origin and the size is
    /// scaled per axis by the ratio of the bounds extents. An axis on which
    /// `old_bounds` has no extent is only translated. Rotation is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use draftboard_core::geometry::{Bounds, Point, Size, Transform};
    /// let transform = Transform::new(Point::new(50.0, 50.0), Size::new(20.0, 20.0));
    /// let old = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
    /// let new = Bounds::new_from_top_left(Point::new(100.0, 0.0), Size::new(200.0, 100.0));
    ///
    /// let mapped = transform.map_between(old, new);
    /// assert_eq!(mapped.position(), Point::new(200.0, 50.0));
    /// assert_eq!(mapped.size(), Size::new(40.0, 20.0));
    /// ```
    pub fn map_between(&self, old_bounds: Bounds, new_bounds: Bounds) -> Self {
        let scale_x = axis_scale(old_bounds.width(), new_bounds.width());
        let scale_y = axis_scale(old_bounds.height(), new_bounds.height());

        let offset = self.position.sub_point(old_bounds.min_point());
        let position = Point::new(
            new_bounds.min_x() + offset.x * scale_x,
            new_bounds.min_y() + offset.y * scale_y,
        );
        let size = Size::new(self.size.width * scale_x, self.size.height * scale_y);

        Self {
            position,
            size,
            rotation: self.rotation,
        }
    }
}

fn axis_scale(old_extent: f32, new_extent: f32) -> f32 {
    if old_extent.abs() < EPSILON {
        1.0
    } else {
        new_extent / old_extent
    }
}
