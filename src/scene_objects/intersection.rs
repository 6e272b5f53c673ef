use crate::scene_objects::shape::Shape;

/// The t value of an intersection together with the object that was hit.
/// Object identity is by reference, never by field equality.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    t: f64,
    object: &'a dyn Shape,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a dyn Shape) -> Intersection<'a> {
        Intersection { t, object }
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn object(&self) -> &'a dyn Shape {
        self.object
    }
}

/// A collection of intersections, kept in insertion order. Callers build it
/// in whatever order is convenient, so nothing here may assume sortedness.
pub struct Intersections<'a> {
    items: Vec<Intersection<'a>>,
}

impl<'a> Intersections<'a> {
    pub fn new(items: Vec<Intersection<'a>>) -> Intersections<'a> {
        Intersections { items }
    }

    pub fn empty() -> Intersections<'a> {
        Intersections { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> &Intersection<'a> {
        &self.items[index]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.items.iter()
    }

    /// Returns the intersection actually visible from the ray's origin: the
    /// lowest t among the non-negative entries. Entries behind the origin
    /// are skipped; the first entry in scan order wins ties.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        let mut hit: Option<&Intersection<'a>> = None;
        for i in &self.items {
            if i.t < 0.0 {
                continue;
            }
            // Strict comparison: an established hit is only displaced by a
            // strictly lower t, so equal or incomparable (NaN) entries lose.
            match hit {
                None => hit = Some(i),
                Some(h) if i.t < h.t => hit = Some(i),
                _ => {}
            }
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_objects::sphere::Sphere;
    use approx::assert_abs_diff_eq;

    fn same_object(a: &dyn Shape, b: &dyn Shape) -> bool {
        std::ptr::eq(a as *const dyn Shape as *const u8, b as *const dyn Shape as *const u8)
    }

    #[test]
    fn intersection_records_t_and_object() {
        let s = Sphere::new();
        let i = Intersection::new(3.5, &s);
        assert_abs_diff_eq!(i.t(), 3.5);
        assert!(same_object(i.object(), &s));
    }

    #[test]
    fn hit_with_all_positive_t() {
        let s = Sphere::new();
        let i1 = Intersection::new(1.0, &s);
        let i2 = Intersection::new(2.0, &s);
        let xs = Intersections::new(vec![i2, i1]);

        let hit = xs.hit().unwrap();
        assert_abs_diff_eq!(hit.t(), 1.0);
    }

    #[test]
    fn hit_skips_negative_t() {
        let s = Sphere::new();
        let i1 = Intersection::new(-1.0, &s);
        let i2 = Intersection::new(1.0, &s);
        let xs = Intersections::new(vec![i2, i1]);

        let hit = xs.hit().unwrap();
        assert_abs_diff_eq!(hit.t(), 1.0);
    }

    #[test]
    fn hit_with_all_negative_t() {
        let s = Sphere::new();
        let i1 = Intersection::new(-2.0, &s);
        let i2 = Intersection::new(-1.0, &s);
        let xs = Intersections::new(vec![i2, i1]);

        assert!(xs.hit().is_none());
    }

    #[test]
    fn hit_is_lowest_nonnegative() {
        let s = Sphere::new();
        let i1 = Intersection::new(5.0, &s);
        let i2 = Intersection::new(7.0, &s);
        let i3 = Intersection::new(-3.0, &s);
        let i4 = Intersection::new(2.0, &s);
        let xs = Intersections::new(vec![i1, i2, i3, i4]);

        let hit = xs.hit().unwrap();
        assert_abs_diff_eq!(hit.t(), 2.0);
    }

    #[test]
    fn hit_ignores_nan_entries_after_a_valid_hit() {
        // A degenerate ray (zero direction) produces t = 0/0 in the sphere
        // quadratic, so NaN entries are reachable from valid input.
        let s = Sphere::new();
        let xs = Intersections::new(vec![
            Intersection::new(2.0, &s),
            Intersection::new(f64::NAN, &s),
        ]);

        let hit = xs.hit().unwrap();
        assert_abs_diff_eq!(hit.t(), 2.0);
    }

    #[test]
    fn hit_keeps_first_entry_on_ties() {
        let s1 = Sphere::new();
        let s2 = Sphere::new();
        let xs = Intersections::new(vec![
            Intersection::new(2.0, &s1),
            Intersection::new(2.0, &s2),
        ]);

        let hit = xs.hit().unwrap();
        assert!(same_object(hit.object(), &s1));
    }
}
