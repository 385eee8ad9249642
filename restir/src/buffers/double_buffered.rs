/// Pair of buffers that swap their current/past roles every frame.
#[derive(Debug)]
pub struct DoubleBuffered<T> {
    a: T,
    b: T,
    alternate: bool,
}

impl<T> DoubleBuffered<T> {
    pub fn new(a: T, b: T) -> Self {
        Self {
            a,
            b,
            alternate: false,
        }
    }

    /// Returns the buffer holding current frame's data.
    pub fn curr(&self) -> &T {
        if self.alternate {
            &self.b
        } else {
            &self.a
        }
    }

    pub fn curr_mut(&mut self) -> &mut T {
        if self.alternate {
            &mut self.b
        } else {
            &mut self.a
        }
    }

    /// Returns the buffer holding previous frame's data.
    pub fn past(&self) -> &T {
        if self.alternate {
            &self.a
        } else {
            &self.b
        }
    }

    /// Returns both buffers at once: current one for writing, past one for
    /// reading.
    pub fn split_mut(&mut self) -> (&mut T, &T) {
        if self.alternate {
            (&mut self.b, &self.a)
        } else {
            (&mut self.a, &self.b)
        }
    }

    /// Swaps roles of both buffers: current becomes past and vice versa.
    ///
    /// No data gets copied.
    pub fn swap(&mut self) {
        self.alternate = !self.alternate;
    }
}
