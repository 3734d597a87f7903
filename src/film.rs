/// Row-major `width x height` grid. Cell `(x, y)` lives at `buffer[y * width + x]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }

    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value;
    }

    /// Column-major copy, indexed `grid[x][y]`.
    pub fn columns(&self) -> Vec<Vec<T>> {
        (0..self.width)
            .map(|x| (0..self.height).map(|y| self.at(x, y)).collect())
            .collect()
    }
}

impl<T> Film<T> {
    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_indexing() {
        let mut film = Film::new(3, 2, 0u32);
        film.write_at(2, 1, 7);
        assert_eq!(film.buffer[5], 7);
        assert_eq!(film.at(2, 1), 7);
        assert_eq!(film.total_pixels(), 6);
    }

    #[test]
    fn test_columns() {
        let mut film = Film::new(3, 2, 0u32);
        for (i, e) in film.buffer.iter_mut().enumerate() {
            *e = i as u32;
        }
        let grid = film.columns();
        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|column| column.len() == 2));
        assert_eq!(grid[0], vec![0, 3]);
        assert_eq!(grid[2], vec![2, 5]);
    }
}
