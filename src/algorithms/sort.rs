/// Bubble sort with early exit.
///
/// Each pass bubbles the largest remaining value to the end of the unsorted
/// prefix; a pass without swaps ends the sort. Returns the number of passes
/// made, so an already sorted slice costs one pass (none below two elements).
pub fn bubble_sort(values: &mut [i32]) -> usize {
    let n = values.len();
    let mut passes = 0;
    for i in 0..n.saturating_sub(1) {
        passes += 1;
        let mut swapped = false;
        // last i elements are already in place
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    passes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_unsorted_values_when_sorting_then_non_decreasing() {
        let mut values = [64, 34, 25, 12, 22, 11, 90, -3, 25];
        bubble_sort(&mut values);
        assert_eq!(values, [-3, 11, 12, 22, 25, 25, 34, 64, 90]);
    }

    #[test]
    fn given_sorted_values_when_sorting_then_exits_after_one_pass() {
        let mut values = [1, 2, 3, 4, 5];
        assert_eq!(bubble_sort(&mut values), 1);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn given_reversed_values_when_sorting_then_needs_n_minus_one_passes() {
        let mut values = [5, 4, 3, 2, 1];
        assert_eq!(bubble_sort(&mut values), 4);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn given_tiny_inputs_when_sorting_then_no_passes() {
        let mut empty: [i32; 0] = [];
        assert_eq!(bubble_sort(&mut empty), 0);
        let mut single = [7];
        assert_eq!(bubble_sort(&mut single), 0);
    }
}
