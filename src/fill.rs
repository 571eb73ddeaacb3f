// src/fill.rs

/// Decides whether a value counts as a gap for forward-filling.
pub trait Missing {
    fn is_missing(&self) -> bool;
}

impl Missing for String {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Missing for &str {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Missing for bool {
    fn is_missing(&self) -> bool {
        !*self
    }
}

impl<T: Missing> Missing for Option<T> {
    fn is_missing(&self) -> bool {
        self.as_ref().map_or(true, Missing::is_missing)
    }
}

impl<T> Missing for Vec<T> {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! missing_when_zero {
    ($($t:ty),*) => {
        $(impl Missing for $t {
            fn is_missing(&self) -> bool {
                *self == 0
            }
        })*
    };
}

missing_when_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Missing for f32 {
    fn is_missing(&self) -> bool {
        *self == 0.0
    }
}

impl Missing for f64 {
    fn is_missing(&self) -> bool {
        *self == 0.0
    }
}

/// Last-observation-carried-forward over `values`, in place.
///
/// Index 0 is never touched. A gap takes the value of its (already filled)
/// predecessor, so a leading run of gaps stays a run of gaps until the first
/// present value shows up.
pub fn ff_slice<T: Missing + Clone>(values: &mut [T]) {
    for i in 1..values.len() {
        if values[i].is_missing() {
            values[i] = values[i - 1].clone();
        }
    }
}

/// Like `ffill()` from pandas, for an owned list.
pub fn ff_list<T: Missing + Clone>(mut values: Vec<T>) -> Vec<T> {
    ff_slice(&mut values);
    values
}

/// Forward-filled copy of `values`; the input is left as is.
pub fn ff_copied<T: Missing + Clone>(values: &[T]) -> Vec<T> {
    ff_list(values.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn fills_numbers_and_none() {
        let out = ff_list(vec![Some(5), Some(0), None, Some(7)]);
        assert_eq!(out, vec![Some(5), Some(5), Some(5), Some(7)]);
    }

    #[test]
    fn first_element_is_never_filled() {
        let out = ff_list(s(&["", "2024-01-02", "2024-01-02"]));
        assert_eq!(out, s(&["", "2024-01-02", "2024-01-02"]));
    }

    #[test]
    fn leading_gaps_stay_until_first_value() {
        let out = ff_list(s(&["", "", "a", "", "b", ""]));
        assert_eq!(out, s(&["", "", "a", "a", "b", "b"]));
    }

    #[test]
    fn empty_input() {
        let out: Vec<String> = ff_list(Vec::new());
        assert!(out.is_empty());
    }

    #[test]
    fn copied_leaves_input_alone() {
        let input = s(&["x", "", ""]);
        let out = ff_copied(&input);
        assert_eq!(input, s(&["x", "", ""]));
        assert_eq!(out, s(&["x", "x", "x"]));
    }

    #[test]
    fn zero_and_empty_vec_count_as_missing_but_nan_does_not() {
        assert_eq!(ff_list(vec![1.5, 0.0, 2.5]), vec![1.5, 1.5, 2.5]);
        let out = ff_list(vec![1.0f64, f64::NAN]);
        assert_eq!(out[0], 1.0);
        assert!(out[1].is_nan());
        assert!(ff_list(vec![2.0f32, f32::NAN])[1].is_nan());
        assert_eq!(
            ff_list(vec![vec![1], vec![], vec![2]]),
            vec![vec![1], vec![1], vec![2]]
        );
        assert_eq!(ff_list(vec![true, false]), vec![true, true]);
    }

    #[test]
    fn fill_properties_hold() {
        let inputs = vec![
            s(&[]),
            s(&[""]),
            s(&["", "", ""]),
            s(&["a", "", "b", "", "", "c"]),
            s(&["", "a", "", "b"]),
            s(&["a", "b", "c"]),
        ];

        for input in inputs {
            let once = ff_copied(&input);
            assert_eq!(once.len(), input.len());

            // applying twice changes nothing
            assert_eq!(ff_copied(&once), once, "not idempotent for {:?}", input);

            if let Some(first) = input.first() {
                assert_eq!(&once[0], first);
            }
            for i in 1..input.len() {
                if input[i].is_missing() {
                    assert_eq!(once[i], once[i - 1]);
                } else {
                    assert_eq!(once[i], input[i]);
                }
            }
        }
    }
}
