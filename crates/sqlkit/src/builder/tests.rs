//! Rendering tests for the statement builder.

use crate::builder::{
    Builder, JoinSource, Pagination, StatementKind, delete, insert, insert_columns, mssql, mysql,
    oracle, postgres, select, sqlite, update,
};
use crate::writer::Writer;
use crate::cond::{Cond, Decr, Eq, Expr, Incr, expr, in_list};
use crate::error::SqlError;
use crate::param::Param;
use crate::traits::to_bound_sql;

// ====== SELECT ======

#[test]
fn test_select_basic() {
    let (sql, args) = select(&["c", "d"])
        .from("table1")
        .and_where(eq! { "a" => 1 })
        .to_sql()
        .unwrap();
    assert_eq!(sql, "SELECT c,d FROM table1 WHERE a=?");
    assert_eq!(args, vec![Param::Int(1)]);
}

#[test]
fn test_select_star_and_alias() {
    assert_eq!(select(&[]).from("t").to_sql().unwrap().0, "SELECT * FROM t");
    assert_eq!(
        select(&["t.a"]).from_as("table1", "t").to_sql().unwrap().0,
        "SELECT t.a FROM table1 t"
    );
}

#[test]
fn test_select_without_table() {
    assert_eq!(
        select(&["a"]).to_sql().unwrap_err(),
        SqlError::NoTableName
    );
}

#[test]
fn test_select_clauses() {
    let sql = select(&["a", "count(*)"])
        .from("t")
        .and_where(gt! { "b" => 0 })
        .group_by("a")
        .having("count(*)>1")
        .order_by("a DESC")
        .to_sql()
        .unwrap()
        .0;
    assert_eq!(
        sql,
        "SELECT a,count(*) FROM t WHERE b>? GROUP BY a HAVING count(*)>1 ORDER BY a DESC"
    );
}

#[test]
fn test_where_combinators() {
    let qb = select(&["a"])
        .from("t")
        .and_where(eq! { "a" => 1 })
        .or_where(eq! { "b" => 2 });
    assert_eq!(qb.to_sql().unwrap().0, "SELECT a FROM t WHERE a=? OR b=?");

    let qb = qb.and_where(eq! { "c" => 3 });
    assert_eq!(
        qb.to_bound_sql().unwrap(),
        "SELECT a FROM t WHERE (a=1 OR b=2) AND c=3"
    );
}

#[test]
fn test_last_call_wins() {
    let sql = select(&["a"]).select(&["b"]).from("t1").from("t2");
    assert_eq!(sql.to_sql().unwrap().0, "SELECT b FROM t2");

    let qb = update(eq! { "a" => 1 }).from("t").delete(eq! { "b" => 2 });
    assert_eq!(qb.kind(), StatementKind::Delete);
    assert_eq!(qb.to_sql().unwrap().0, "DELETE FROM t WHERE b=?");
}

#[test]
fn test_bare_builder_is_not_a_statement() {
    assert_eq!(Builder::new().to_sql().unwrap_err(), SqlError::UnsupportedType);
    assert_eq!(mysql().to_bound_sql().unwrap_err(), SqlError::UnsupportedType);
}

// ====== JOIN ======

#[test]
fn test_joins() {
    let (sql, args) = select(&["c", "d"])
        .from("table1")
        .left_join("table2", eq! { "table1.id" => 1 }.and(lt! { "table2.id" => 3 }))
        .right_join("table3", "table2.id = table3.tid")
        .and_where(eq! { "a" => 1 })
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT c,d FROM table1 LEFT JOIN table2 ON table1.id=? AND table2.id<? \
         RIGHT JOIN table3 ON table2.id = table3.tid WHERE a=?"
    );
    assert_eq!(args, vec![Param::Int(1), Param::Int(3), Param::Int(1)]);
}

#[test]
fn test_join_sub_query() {
    let sub = select(&["id"]).from("t2").and_where(eq! { "x" => 1 });
    let sql = select(&["a.id"])
        .from("t1 a")
        .inner_join(JoinSource::aliased(sub, "b"), "a.id = b.id")
        .to_bound_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT a.id FROM t1 a INNER JOIN (SELECT id FROM t2 WHERE x=1) b ON a.id = b.id"
    );
}

#[test]
fn test_join_without_on() {
    let qb = select(&[])
        .from("t1")
        .cross_join("t2", Cond::default())
        .full_join("t3", "t1.id = t3.id");
    assert_eq!(qb.joins().len(), 2);
    assert_eq!(
        qb.to_sql().unwrap().0,
        "SELECT * FROM t1 CROSS JOIN t2 FULL JOIN t3 ON t1.id = t3.id"
    );
}

// ====== INSERT ======

#[test]
fn test_insert_values() {
    let (sql, args) = insert(eq! { "d" => 2, "c" => 1 })
        .into_table("table1")
        .to_sql()
        .unwrap();
    assert_eq!(sql, "INSERT INTO table1 (c,d) Values (?,?)");
    assert_eq!(args, vec![Param::Int(1), Param::Int(2)]);
}

#[test]
fn test_insert_accumulates_sorted() {
    let (sql, args) = insert(eq! { "b" => 2 })
        .insert(eq! { "a" => 1 })
        .into_table("t")
        .to_sql()
        .unwrap();
    assert_eq!(sql, "INSERT INTO t (a,b) Values (?,?)");
    assert_eq!(args, vec![Param::Int(1), Param::Int(2)]);
}

#[test]
fn test_insert_null_and_expressions() {
    let sql = insert(eq! {
        "a" => Param::Null,
        "b" => Expr::raw("now()"),
        "c" => "x",
        "d" => select(&["max(id)"]).from("t2"),
    })
    .into_table("t")
    .to_sql()
    .unwrap()
    .0;
    assert_eq!(
        sql,
        "INSERT INTO t (a,b,c,d) Values (null,(now()),?,(SELECT max(id) FROM t2))"
    );
}

#[test]
fn test_insert_errors() {
    assert_eq!(
        insert(eq! { "a" => 1 }).to_sql().unwrap_err(),
        SqlError::NoTableName
    );
    assert_eq!(
        insert(Eq::new()).into_table("t").to_sql().unwrap_err(),
        SqlError::NoColumnToInsert
    );
    assert_eq!(
        insert(eq! { "a" => vec![1, 2] })
            .into_table("t")
            .to_sql()
            .unwrap_err(),
        SqlError::UnsupportedValue("a".to_string())
    );
}

#[test]
fn test_insert_select() {
    let (sql, args) = insert_columns(&["a", "b"])
        .into_table("t2")
        .select(&["a", "b"])
        .from("t1")
        .and_where(eq! { "x" => 1 })
        .to_sql()
        .unwrap();
    assert_eq!(sql, "INSERT INTO t2 (a,b) SELECT a,b FROM t1 WHERE x=?");
    assert_eq!(args, vec![Param::Int(1)]);
}

#[test]
fn test_insert_select_source_wins_over_values() {
    let (sql, args) = insert(eq! { "a" => 1 })
        .into_table("t2")
        .select(&["a"])
        .from("t1")
        .to_sql()
        .unwrap();
    assert_eq!(sql, "INSERT INTO t2 SELECT a FROM t1");
    assert!(args.is_empty());
}

// ====== UPDATE ======

#[test]
fn test_update_assignments() {
    let (sql, args) = update(eq! {
        "a" => 2,
        "b" => Incr(1),
        "c" => Decr(1),
        "d" => Expr::raw("select count(*) from table2"),
    })
    .from("table2")
    .and_where(eq! { "a" => 1 })
    .to_sql()
    .unwrap();
    assert_eq!(
        sql,
        "UPDATE table2 SET a=?,b=b+?,c=c-?,d=(select count(*) from table2) WHERE a=?"
    );
    assert_eq!(
        args,
        vec![Param::Int(2), Param::Int(1), Param::Int(1), Param::Int(1)]
    );
}

#[test]
fn test_update_raw_assignment() {
    let sql = update(Expr::raw("c = c + 1"))
        .update(eq! { "a" => 1 })
        .from("t")
        .to_sql()
        .unwrap()
        .0;
    assert_eq!(sql, "UPDATE t SET c = c + 1,a=?");
}

#[test]
fn test_update_errors() {
    assert_eq!(
        update(eq! { "a" => 1 }).to_sql().unwrap_err(),
        SqlError::NoTableName
    );
    assert_eq!(
        update(Eq::new()).from("t").to_sql().unwrap_err(),
        SqlError::NoColumnToUpdate
    );
}

// ====== DELETE ======

#[test]
fn test_delete() {
    assert_eq!(
        delete(eq! { "a" => 1 }).from("table1").to_bound_sql().unwrap(),
        "DELETE FROM table1 WHERE a=1"
    );
    assert_eq!(
        delete(Cond::default()).from("t").to_sql().unwrap().0,
        "DELETE FROM t"
    );
    assert_eq!(
        delete(eq! { "a" => 1 }).to_sql().unwrap_err(),
        SqlError::NoTableName
    );
}

// ====== set operations ======

#[test]
fn test_union_all() {
    let (sql, args) = select(&["*"])
        .from("t1")
        .and_where(eq! { "a" => 1 })
        .union_all(select(&["*"]).from("t2").and_where(neq! { "b" => 2 }))
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "(SELECT * FROM t1 WHERE a=?) UNION ALL (SELECT * FROM t2 WHERE b<>?)"
    );
    assert_eq!(args, vec![Param::Int(1), Param::Int(2)]);
}

#[test]
fn test_chained_set_operations() {
    let qb = select(&["a"])
        .from("t1")
        .union(select(&["a"]).from("t2"))
        .intersect_all(select(&["a"]).from("t3"))
        .except_distinct(select(&["a"]).from("t4"));
    assert_eq!(qb.kind(), StatementKind::SetOperation);
    assert_eq!(
        qb.to_sql().unwrap().0,
        "(SELECT a FROM t1) UNION (SELECT a FROM t2) INTERSECT ALL (SELECT a FROM t3) \
         EXCEPT DISTINCT (SELECT a FROM t4)"
    );
}

#[test]
fn test_set_operation_host_rejects_clauses() {
    let union = || select(&["a"]).from("t1").union(select(&["a"]).from("t2"));
    assert_eq!(
        union().and_where(eq! { "a" => 1 }).to_sql().unwrap_err(),
        SqlError::UnexpectedUnionConditions
    );
    assert_eq!(
        union().order_by("a").to_sql().unwrap_err(),
        SqlError::UnexpectedUnionConditions
    );
    assert_eq!(
        union().limit(10).to_sql().unwrap_err(),
        SqlError::UnexpectedUnionConditions
    );
}

#[test]
fn test_set_operation_members_must_select() {
    let err = select(&["a"])
        .from("t")
        .union(delete(eq! { "a" => 1 }).from("t"))
        .to_sql()
        .unwrap_err();
    assert_eq!(err, SqlError::UnsupportedUnionMembers);
}

#[test]
fn test_set_operation_members_inherit_dialect() {
    let (sql, args) = postgres()
        .select(&["a"])
        .from("t1")
        .and_where(eq! { "a" => 1 })
        .union_all(select(&["a"]).from("t2").and_where(eq! { "a" => 2 }))
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "(SELECT a FROM t1 WHERE a=$1) UNION ALL (SELECT a FROM t2 WHERE a=$2)"
    );
    assert_eq!(args.len(), 2);
}

// ====== sub-queries ======

#[test]
fn test_select_from_union() {
    let union = select(&["id"])
        .from("table1")
        .and_where(eq! { "a" => 1 })
        .union_all(select(&["id"]).from("table1").and_where(eq! { "a" => 2 }));
    let (sql, args) = select(&["sub.id"])
        .from_sub(union, "sub")
        .and_where(eq! { "b" => 1 })
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT sub.id FROM ((SELECT id FROM table1 WHERE a=?) UNION ALL \
         (SELECT id FROM table1 WHERE a=?)) sub WHERE b=?"
    );
    assert_eq!(args, vec![Param::Int(1), Param::Int(2), Param::Int(1)]);
}

#[test]
fn test_unnamed_derived_table() {
    let sub = || select(&["a"]).from("t");
    assert_eq!(
        select(&["a"]).from_nested(sub()).to_sql().unwrap().0,
        "SELECT a FROM (SELECT a FROM t)"
    );
    assert_eq!(
        select(&["a"])
            .from_nested(sub())
            .and_where(eq! { "a" => 1 })
            .to_sql()
            .unwrap_err(),
        SqlError::UnnamedDerivedTable
    );
}

#[test]
fn test_sub_query_must_be_select() {
    let err = select(&["a"])
        .from_sub(update(eq! { "a" => 1 }).from("t"), "s")
        .to_sql()
        .unwrap_err();
    assert_eq!(err, SqlError::UnexpectedSubQuery);
}

#[test]
fn test_nested_statement_inherits_dialect() {
    let (sql, args) = postgres()
        .select(&["a"])
        .from("t")
        .and_where(in_list(
            "b",
            select(&["id"]).from("t2").and_where(eq! { "c" => 1 }),
        ))
        .and_where(eq! { "d" => 2 })
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT a FROM t WHERE b IN (SELECT id FROM t2 WHERE c=$1) AND d=$2"
    );
    assert_eq!(args, vec![Param::Int(1), Param::Int(2)]);

    let sql = postgres()
        .select(&["a"])
        .from("t")
        .and_where(in_list("b", select(&["id"]).from("t2").limit(3)))
        .to_sql()
        .unwrap()
        .0;
    assert_eq!(sql, "SELECT a FROM t WHERE b IN (SELECT id FROM t2 LIMIT 3)");
}

#[test]
fn test_inconsistent_dialect() {
    let err = postgres()
        .select(&["a"])
        .from("t")
        .and_where(in_list("b", mysql().select(&["id"]).from("t2")))
        .to_sql()
        .unwrap_err();
    assert_eq!(err, SqlError::InconsistentDialect);
    assert!(err.is_dialect_error());
}

#[test]
fn test_inconsistent_dialect_in_sources() {
    let err = mysql()
        .select(&["a"])
        .from_sub(oracle().select(&["a"]).from("table_a"), "ta")
        .to_sql()
        .unwrap_err();
    assert_eq!(err, SqlError::InconsistentDialect);

    let err = postgres()
        .select(&["a.id"])
        .from("t1 a")
        .inner_join(
            JoinSource::aliased(mysql().select(&["id"]).from("t2"), "b"),
            "a.id = b.id",
        )
        .to_sql()
        .unwrap_err();
    assert_eq!(err, SqlError::InconsistentDialect);

    let err = mysql()
        .select(&["a"])
        .from("t1")
        .union(postgres().select(&["a"]).from("t2"))
        .to_sql()
        .unwrap_err();
    assert_eq!(err, SqlError::InconsistentDialect);
}

#[test]
fn test_inconsistent_dialect_among_siblings() {
    let err = select(&["a"])
        .from("t1")
        .union(mysql().select(&["a"]).from("t2"))
        .union(postgres().select(&["a"]).from("t3"))
        .to_sql()
        .unwrap_err();
    assert_eq!(err, SqlError::InconsistentDialect);

    let err = select(&["a.id"])
        .from("t1 a")
        .left_join(
            JoinSource::aliased(mysql().select(&["id"]).from("t2"), "b"),
            "a.id = b.id",
        )
        .left_join(
            JoinSource::aliased(postgres().select(&["id"]).from("t3"), "c"),
            "a.id = c.id",
        )
        .to_bound_sql()
        .unwrap_err();
    assert_eq!(err, SqlError::InconsistentDialect);

    let sql = select(&["a"])
        .from("t1")
        .union(mysql().select(&["a"]).from("t2"))
        .union(mysql().select(&["a"]).from("t3"))
        .to_sql()
        .unwrap()
        .0;
    assert_eq!(
        sql,
        "(SELECT a FROM t1) UNION (SELECT a FROM t2) UNION (SELECT a FROM t3)"
    );
}

// ====== pagination ======

fn paged(qb: Builder) -> Builder {
    qb.select(&["a", "b", "c"])
        .from("table1")
        .and_where(eq! { "a" => 1 })
        .order_by("a ASC")
}

#[test]
fn test_limit_offset_dialects() {
    assert_eq!(
        paged(mysql()).limit_offset(10, 5).to_sql().unwrap().0,
        "SELECT a,b,c FROM table1 WHERE a=? ORDER BY a ASC LIMIT 10 OFFSET 5"
    );
    assert_eq!(
        paged(sqlite()).limit(10).to_sql().unwrap().0,
        "SELECT a,b,c FROM table1 WHERE a=? ORDER BY a ASC LIMIT 10"
    );
    assert_eq!(
        paged(postgres()).limit_offset(10, 5).to_sql().unwrap().0,
        "SELECT a,b,c FROM table1 WHERE a=$1 ORDER BY a ASC LIMIT 10 OFFSET 5"
    );
}

#[test]
fn test_oracle_limit() {
    let (sql, args) = paged(oracle()).limit(10).to_sql().unwrap();
    assert_eq!(
        sql,
        "SELECT a,b,c FROM (SELECT a,b,c,ROWNUM RN FROM table1 WHERE a=:p1 ORDER BY a ASC) at \
         WHERE at.RN<=:p2"
    );
    assert_eq!(
        args,
        vec![Param::named("p1", 1), Param::named("p2", 10)]
    );

    let (sql, args) = paged(oracle()).limit_offset(10, 5).to_sql().unwrap();
    assert_eq!(
        sql,
        "SELECT a,b,c FROM (SELECT * FROM (SELECT a,b,c,ROWNUM RN FROM table1 WHERE a=:p1 \
         ORDER BY a ASC) at WHERE at.RN<=:p2) att WHERE att.RN>:p3"
    );
    assert_eq!(
        args,
        vec![
            Param::named("p1", 1),
            Param::named("p2", 15),
            Param::named("p3", 5),
        ]
    );
}

#[test]
fn test_mssql_limit() {
    let (sql, args) = paged(mssql()).limit_offset(10, 5).to_sql().unwrap();
    assert_eq!(
        sql,
        "SELECT a,b,c FROM (SELECT TOP 15 a,b,c,ROW_NUMBER() OVER (ORDER BY (SELECT 1)) AS RN \
         FROM table1 WHERE a=@p1 ORDER BY a ASC) at WHERE at.RN>@p2"
    );
    assert_eq!(args, vec![Param::named("p1", 1), Param::named("p2", 5)]);

    let sql = paged(mssql()).limit(10).to_sql().unwrap().0;
    assert_eq!(
        sql,
        "SELECT a,b,c FROM (SELECT TOP 10 a,b,c,ROW_NUMBER() OVER (ORDER BY (SELECT 1)) AS RN \
         FROM table1 WHERE a=@p1 ORDER BY a ASC) at"
    );
}

#[test]
fn test_limit_errors() {
    assert_eq!(
        select(&["a"]).from("t").limit(10).to_sql().unwrap_err(),
        SqlError::DialectNotSetUp
    );
    assert_eq!(
        mysql().select(&["a"]).from("t").limit(0).to_sql().unwrap_err(),
        SqlError::InvalidLimitation
    );
    assert_eq!(
        mysql()
            .select(&["a"])
            .from("t")
            .limit_offset(10, -1)
            .to_sql()
            .unwrap_err(),
        SqlError::InvalidLimitation
    );
}

#[test]
fn test_pagination_survives_rendering() {
    let qb = paged(oracle()).limit_offset(10, 5);
    qb.to_sql().unwrap();
    qb.to_bound_sql().unwrap();
    assert_eq!(qb.pagination(), Some(Pagination { limit: 10, offset: 5 }));
}

#[test]
fn test_window_end_overflow() {
    for qb in [mssql(), oracle()] {
        assert_eq!(
            qb.select(&["a"])
                .from("t")
                .limit_offset(i64::MAX, 1)
                .to_sql()
                .unwrap_err(),
            SqlError::InvalidLimitation
        );
    }
    assert_eq!(
        mysql()
            .select(&["a"])
            .from("t")
            .limit_offset(i64::MAX, 1)
            .to_sql()
            .unwrap()
            .0,
        "SELECT a FROM t LIMIT 9223372036854775807 OFFSET 1"
    );
}

#[test]
fn test_pagination_survives_failed_rendering() {
    let qb = oracle()
        .select(&["a"])
        .from_nested(select(&["a"]).from("t"))
        .and_where(eq! { "a" => 1 })
        .limit(10);
    assert_eq!(qb.to_sql().unwrap_err(), SqlError::UnnamedDerivedTable);
    assert_eq!(qb.pagination(), Some(Pagination { limit: 10, offset: 0 }));
}

#[test]
fn test_paginated_set_operation() {
    let union = || {
        select(&["a"])
            .from("t1")
            .union_all(select(&["a"]).from("t2"))
    };

    assert_eq!(
        union()
            .with_dialect(crate::Dialect::Mysql)
            .to_sql_paginated(10, 5)
            .unwrap()
            .0,
        "(SELECT a FROM t1) UNION ALL (SELECT a FROM t2) LIMIT 10 OFFSET 5"
    );

    let (sql, args) = oracle()
        .select(&["a"])
        .from("t1")
        .union_all(select(&["a"]).from("t2"))
        .to_sql_paginated(10, 0)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT a FROM (SELECT at.*,ROWNUM RN FROM ((SELECT a FROM t1) UNION ALL \
         (SELECT a FROM t2)) at) at WHERE at.RN<=:p1"
    );
    assert_eq!(args, vec![Param::named("p1", 10)]);

    assert_eq!(
        union().to_sql_paginated(10, 0).unwrap_err(),
        SqlError::DialectNotSetUp
    );
    assert_eq!(
        update(eq! { "a" => 1 })
            .from("t")
            .to_sql_paginated(10, 0)
            .unwrap_err(),
        SqlError::UnsupportedType
    );
}

// ====== placeholders ======

#[test]
fn test_placeholders_per_dialect() {
    let qb = |b: Builder| {
        b.select(&["a"])
            .from("t")
            .and_where(eq! { "a" => 1, "b" => "x" })
            .to_sql()
            .unwrap()
    };

    assert_eq!(qb(mysql()).0, "SELECT a FROM t WHERE a=? AND b=?");
    assert_eq!(qb(postgres()).0, "SELECT a FROM t WHERE a=$1 AND b=$2");
    assert_eq!(
        qb(postgres()).1,
        vec![Param::Int(1), Param::Text("x".to_string())]
    );

    let (sql, args) = qb(mssql());
    assert_eq!(sql, "SELECT a FROM t WHERE a=@p1 AND b=@p2");
    assert_eq!(args, vec![Param::named("p1", 1), Param::named("p2", "x")]);

    assert_eq!(qb(oracle()).0, "SELECT a FROM t WHERE a=:p1 AND b=:p2");
}

#[test]
fn test_placeholders_skip_literals() {
    let sql = postgres()
        .select(&["a"])
        .from("t")
        .and_where(expr("b='?' AND c=?", [1]))
        .to_sql()
        .unwrap()
        .0;
    assert_eq!(sql, "SELECT a FROM t WHERE b='?' AND c=$1");
}

#[test]
fn test_bound_sql_ignores_dialect_placeholders() {
    let qb = postgres()
        .select(&["a"])
        .from("t")
        .and_where(eq! { "a" => "x" });
    assert_eq!(to_bound_sql(&qb).unwrap(), "SELECT a FROM t WHERE a='x'");
}

#[test]
fn test_inline_counts_arguments() {
    let mut w = Writer::new();
    select(&["a"])
        .from("t")
        .and_where(eq! { "a" => 1, "b" => "x" })
        .write_to(&mut w)
        .unwrap();
    assert_eq!(
        super::inline(&w).unwrap(),
        ("SELECT a FROM t WHERE a=1 AND b='x'".to_string(), 2)
    );
}
