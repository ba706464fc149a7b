use std::collections::HashMap;

// Writes further than this past the end of the dense image go to the sparse map.
const SPARSE_GAP: usize = 4096;

/// Address space of one process. Cells never written read as 0.
///
/// Low addresses live in a vector that grows on write; isolated far writes
/// (usually relative base offsets) live in a map. No key of the map is ever
/// inside the vector's range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Memory {
    dense: Vec<i64>,
    sparse: HashMap<usize, i64>,
}

impl From<&[i64]> for Memory {
    fn from(image: &[i64]) -> Self {
        Self {
            dense: Vec::from(image),
            sparse: HashMap::new(),
        }
    }
}

impl Memory {
    pub fn read(&self, addr: usize) -> i64 {
        match self.dense.get(addr) {
            Some(&v) => v,
            None => self.sparse.get(&addr).copied().unwrap_or(0),
        }
    }

    pub fn write(&mut self, addr: usize, value: i64) {
        if addr < self.dense.len() {
            self.dense[addr] = value;
        } else if addr - self.dense.len() <= SPARSE_GAP {
            self.grow_dense(addr + 1);
            self.dense[addr] = value;
        } else {
            self.sparse.insert(addr, value);
        }
    }

    pub fn snapshot(&self) -> Vec<i64> {
        self.dense.clone()
    }

    pub fn image(&self) -> &[i64] {
        &self.dense
    }

    fn grow_dense(&mut self, new_len: usize) {
        let old_len = self.dense.len();
        self.dense.resize(new_len, 0);
        if self.sparse.is_empty() {
            return;
        }

        let moved = self
            .sparse
            .keys()
            .copied()
            .filter(|&a| a >= old_len && a < new_len)
            .collect::<Vec<_>>();
        for addr in moved {
            if let Some(v) = self.sparse.remove(&addr) {
                self.dense[addr] = v;
            }
        }
    }
}
