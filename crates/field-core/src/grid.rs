/// Dense `size x size` rasterization of an intensity field.
///
/// Cell `(x, y)` holds the field value at integer coordinate `(x, y)`. Storage
/// is x-major: `values[x * size + y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    values: Vec<i32>,
}

impl Grid {
    /// Evaluates `f` at every integer coordinate in `[0, size)^2`.
    pub fn from_fn(size: u32, mut f: impl FnMut(u32, u32) -> i32) -> Self {
        let n = size as usize;
        let mut values = Vec::with_capacity(n * n);
        for x in 0..size {
            for y in 0..size {
                values.push(f(x, y));
            }
        }
        Self { size, values }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        self.idx(x, y).map(|idx| self.values[idx])
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// One slice per x, each indexed by y.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.values.chunks(self.size.max(1) as usize)
    }

    pub fn min(&self) -> Option<i32> {
        self.values.iter().copied().min()
    }

    pub fn max(&self) -> Option<i32> {
        self.values.iter().copied().max()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: i64 = self.values.iter().map(|&v| v as i64).sum();
        Some(sum as f64 / self.values.len() as f64)
    }

    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(x as usize * self.size as usize + y as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_x_major() {
        let grid = Grid::from_fn(3, |x, y| (x * 10 + y) as i32);
        assert_eq!(grid.values(), &[0, 1, 2, 10, 11, 12, 20, 21, 22]);
        assert_eq!(grid.get(2, 1), Some(21));
        assert_eq!(grid.get(3, 0), None);

        let rows: Vec<&[i32]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[10, 11, 12]);
    }

    #[test]
    fn stats_cover_all_cells() {
        let grid = Grid::from_fn(2, |x, y| (x + y) as i32);
        assert_eq!(grid.min(), Some(0));
        assert_eq!(grid.max(), Some(2));
        assert_eq!(grid.mean(), Some(1.0));
    }
}
