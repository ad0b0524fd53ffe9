use tally_core::Session;

/// Full-screen rendering of the session: product list, the add-item form
/// when visible, and the bill panel. Pure string building; the shell decides
/// when to print it.
pub fn screen(session: &Session, currency_symbol: &str) -> String {
    let mut out = String::new();

    out.push_str("Shopping List\n");
    for (index, product) in session.catalog().products().iter().enumerate() {
        let marker = if product.selected { "x" } else { " " };
        out.push_str(&format!(
            "  {:>2}. [{marker}] {:<24} {currency_symbol}{}\n",
            index + 1,
            product.name,
            product.price
        ));
    }

    if session.form_open() {
        let form = session.form();
        out.push_str("\nAdd Item\n");
        out.push_str(&format!("  name:   {}\n", form.name()));
        out.push_str(&format!("  amount: {}\n", form.amount().raw()));
        out.push_str(&format!("  price:  {}\n", form.price_per_unit().raw()));
    }

    out.push_str("\nCalculate Your Bill\n");
    out.push_str(&format!(
        "  bill:    {currency_symbol}{} (read-only)\n",
        session.bill()
    ));
    out.push_str(&format!("  balance: {}\n", session.evaluator().balance().raw()));

    out
}

/// Bordered blocking notice, the terminal stand-in for a modal alert.
pub fn notice(text: &str) -> String {
    let width = text.chars().count() + 4;
    let border: String = "-".repeat(width);
    format!("+{border}+\n|  {text}  |\n+{border}+\n")
}
