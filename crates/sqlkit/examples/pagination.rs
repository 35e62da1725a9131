//! Page through the same query in every dialect.
//!
//! Run with: cargo run --example pagination -p sqlkit

use sqlkit::{Dialect, SqlResult, eq, gte, like, or};

fn main() -> SqlResult<()> {
    for dialect in Dialect::ALL {
        let query = sqlkit::dialect(dialect)
            .select(&["id", "title", "score"])
            .from("articles")
            .and_where(eq! { "published" => true })
            .and_where(or![like("title", "rust"), gte! { "score" => 90 }])
            .order_by("score DESC")
            .limit_offset(10, 20);

        let (sql, args) = query.to_sql()?;
        println!("-- {dialect}");
        println!("{sql}");
        println!("   args: {args:?}");
        println!("   bound: {}", query.to_bound_sql()?);
        println!();
    }

    Ok(())
}
