use crate::policy::exprs::AsExpr;
use crate::policy::grammar::LexedAsExpr;

pub fn clean_as_expr(lexed: LexedAsExpr) -> AsExpr {
    match lexed {
        LexedAsExpr::Field(field) => AsExpr::Field(field),
        LexedAsExpr::And(left, right) => AsExpr::And {
            left: Box::new(clean_as_expr(*left)),
            right: Box::new(clean_as_expr(*right)),
        },
        LexedAsExpr::Or(left, right) => AsExpr::Or {
            left: Box::new(clean_as_expr(*left)),
            right: Box::new(clean_as_expr(*right)),
        },
        LexedAsExpr::Except(left, right) => AsExpr::Except {
            left: Box::new(clean_as_expr(*left)),
            right: Box::new(clean_as_expr(*right)),
        },
        LexedAsExpr::Group(inner) => clean_as_expr(*inner),
    }
}
