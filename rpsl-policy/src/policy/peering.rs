use crate::policy::as_expr::clean_as_expr;
use crate::policy::exprs::{AsExpr, PeeringRef};
use crate::policy::grammar::LexedPeering;
use crate::policy::PolicyContext;

fn parse_as_expr(tokens: &[String], ctx: &mut PolicyContext) -> Option<AsExpr> {
    let joined = tokens.join(" ");
    ctx.lex_with(|grammar| grammar.as_expression(&joined))
        .map(clean_as_expr)
}

///
/// Resolves a lexed `<mp-peering>`. `None` when its as-expression does not
/// parse, the caller drops such a peering. Router expressions that do not
/// parse are left out of an otherwise resolved peering.
///
pub fn clean_mp_peering(lexed: LexedPeering, ctx: &mut PolicyContext) -> Option<PeeringRef> {
    match lexed {
        LexedPeering::PeeringSetName(name) => Some(PeeringRef::PeeringSetName(name)),
        LexedPeering::Expression {
            as_expression,
            router_expression_1,
            router_expression_2,
        } => {
            let as_expr = parse_as_expr(&as_expression, ctx)?;
            let router_expr1 = router_expression_1.and_then(|tokens| parse_as_expr(&tokens, ctx));
            let router_expr2 = router_expression_2.and_then(|tokens| parse_as_expr(&tokens, ctx));
            Some(PeeringRef::Expression {
                as_expr,
                router_expr1,
                router_expr2,
            })
        }
    }
}

pub fn parse_mp_peering(raw: &[String], ctx: &mut PolicyContext) -> Option<PeeringRef> {
    let joined = raw.join(" ");
    let lexed = ctx.lex_with(|grammar| grammar.mp_peering(&joined))?;
    clean_mp_peering(lexed, ctx)
}
