/// Largest page a list operation returns
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination as requested by a client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub limit: u32,
    pub page: u32,
}

/// Pagination as handed to a store: limit already clamped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl PageInfo {
    pub fn new(limit: u32, page: u32) -> Self {
        Self { limit, page }
    }

    /// Clamps the limit and computes the row offset.
    ///
    /// A limit of zero or above [`MAX_PAGE_SIZE`] becomes [`MAX_PAGE_SIZE`];
    /// the offset is `limit * page`.
    pub fn clamp(self) -> Page {
        let limit = if self.limit == 0 || self.limit > MAX_PAGE_SIZE {
            MAX_PAGE_SIZE
        } else {
            self.limit
        };

        Page {
            limit: i64::from(limit),
            offset: i64::from(limit) * i64::from(self.page),
        }
    }
}
