/// Insert `separator` into a run of integer digits
///
/// The group nearest the decimal point is `primary` digits wide, every group
/// further out is `secondary` digits wide. A zero `secondary` leaves the rest
/// of the digits in a single group.
pub(super) fn group_integer(digits: &str, primary: usize, secondary: usize, separator: &str) -> String {
    if primary == 0 || digits.len() <= primary {
        return digits.to_string();
    }

    let (mut rest, last) = digits.split_at(digits.len() - primary);
    let mut groups = vec![last];
    if secondary > 0 {
        while rest.len() > secondary {
            let (head, group) = rest.split_at(rest.len() - secondary);
            groups.push(group);
            rest = head;
        }
    }
    groups.push(rest);
    groups.reverse();
    groups.join(separator)
}
