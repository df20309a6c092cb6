use crate::core::bounds::BoundsOriginRoot;
use crate::core::Vec2;

/// Row-major cell buffer. Indexing with a position outside the bounds panics;
/// use `get` when the position is not known to be inside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new_with_size(width: i32, height: i32, default: T) -> Self
    where
        T: Clone,
    {
        BoundedGrid::new(BoundsOriginRoot::new(width, height), default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area() as usize];
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.extent.x
    }

    pub fn height(&self) -> i32 {
        self.bounds.extent.y
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects a zero chunk size
        self.cells.chunks(self.bounds.extent.x.max(1) as usize)
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}
