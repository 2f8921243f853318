/// Builds a [`Reaction`](crate::reaction::Reaction) from a rate constant and two lists
/// of species handles.
///
/// Repeating a species repeats its entry, which is how stoichiometric coefficients
/// above one are written. Either side may be empty.
///
/// ```
/// use reactor::prelude::*;
///
/// let ca = Species::new("Ca");
/// let c = Species::new("C");
/// let o = Species::new("O");
/// let caco3 = Species::new("CaCO3");
///
/// let forward = reaction!(9.0; ca, c, o => caco3);
/// let reverse = reaction!(11.0; caco3 => ca, c, o);
/// let inflow = reaction!(1.0; => ca);
///
/// assert_eq!(forward.to_string(), "Ca + C + O -> CaCO3");
/// assert_eq!(reverse.products().len(), 3);
/// assert!(inflow.reactants().is_empty());
/// ```
#[macro_export]
macro_rules! reaction {
    (
        $rate_constant:expr;
        $( $reactant:expr ),* => $( $product:expr ),*
    ) => {{
        #[allow(unused_mut)]
        let mut reaction = $crate::reaction::Reaction::new($rate_constant);
        $(
            reaction.add_reactant(&$reactant);
        )*
        $(
            reaction.add_product(&$product);
        )*
        reaction
    }};
}
