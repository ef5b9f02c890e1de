use crate::policy::exprs::{Filter, FilterLeaf};
use crate::policy::grammar::LexedFilter;

fn clean_binary(left: LexedFilter, right: LexedFilter) -> (Box<Filter>, Box<Filter>) {
    (Box::new(clean_filter(left)), Box::new(clean_filter(right)))
}

///
/// Turns a lexed `<mp-filter>` into its normalized tree. Parentheses only
/// exist to drive precedence in the grammar, they are dropped here.
///
pub fn clean_filter(lexed: LexedFilter) -> Filter {
    match lexed {
        LexedFilter::And(left, right) => {
            let (left, right) = clean_binary(*left, *right);
            Filter::And { left, right }
        }
        LexedFilter::Or(left, right) => {
            let (left, right) = clean_binary(*left, *right);
            Filter::Or { left, right }
        }
        LexedFilter::Not(inner) => Filter::Not(Box::new(clean_filter(*inner))),
        LexedFilter::Group(inner) => clean_filter(*inner),
        LexedFilter::Community(call) => Filter::Leaf(FilterLeaf::Community(call)),
        LexedFilter::PolicyFilter(tokens) => Filter::Leaf(FilterLeaf::PolicyFilter(tokens)),
    }
}
