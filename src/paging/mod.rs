//! Page slicing and carousel bucketing
//!
//! Both operate on a sequence already in final display order
//! (post-ranking).

/// Items belonging to a 1-based page, clipped to bounds
///
/// Out-of-range pages yield an empty slice, never an error; `page_number
/// == 0` is rejected earlier at request validation.
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }

    let start = (page_number - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }

    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Group items into display carousels of `bucket_size`
///
/// Plain non-overlapping chunks; the final carousel may hold fewer than
/// `bucket_size` items.
pub fn bucket<T: Clone>(items: &[T], bucket_size: usize) -> Vec<Vec<T>> {
    if bucket_size == 0 {
        return Vec::new();
    }

    items.chunks(bucket_size).map(<[T]>::to_vec).collect()
}
