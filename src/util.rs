pub(crate) fn num_digits(v: usize) -> usize {
  use core::iter::successors;

  successors(Some(v), |&n| (n >= 10).then_some(n / 10)).count()
}

#[cfg(test)]
mod tests {
  use super::num_digits;

  #[test]
  fn counts_decimal_digits() {
    assert_eq!(num_digits(0), 1);
    assert_eq!(num_digits(9), 1);
    assert_eq!(num_digits(10), 2);
    assert_eq!(num_digits(1234), 4);
  }
}
