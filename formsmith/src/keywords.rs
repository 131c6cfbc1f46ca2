//! Reserved word lists
//!
//! Entity names are checked against SQL keywords since they usually become
//! table names. Class and form names are checked against PHP reserved words.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static SQL_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ADD", "ALL", "ALTER", "ANALYZE", "AND", "AS", "ASC", "BEFORE", "BETWEEN", "BIGINT",
        "BINARY", "BLOB", "BOTH", "BY", "CALL", "CASCADE", "CASE", "CHANGE", "CHAR",
        "CHARACTER", "CHECK", "COLLATE", "COLUMN", "CONDITION", "CONSTRAINT", "CONTINUE",
        "CONVERT", "CREATE", "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP",
        "CURRENT_USER", "CURSOR", "DATABASE", "DATABASES", "DECIMAL", "DECLARE", "DEFAULT",
        "DELETE", "DESC", "DESCRIBE", "DISTINCT", "DIV", "DOUBLE", "DROP", "EACH", "ELSE",
        "ELSEIF", "END", "ESCAPE", "EXCEPT", "EXISTS", "EXIT", "EXPLAIN", "FALSE", "FETCH",
        "FLOAT", "FOR", "FORCE", "FOREIGN", "FROM", "FULL", "FULLTEXT", "FUNCTION", "GRANT",
        "GROUP", "HAVING", "IF", "IGNORE", "IN", "INDEX", "INNER", "INOUT", "INSERT", "INT",
        "INTEGER", "INTERSECT", "INTERVAL", "INTO", "IS", "ITERATE", "JOIN", "KEY", "KEYS",
        "KILL", "LEADING", "LEAVE", "LEFT", "LIKE", "LIMIT", "LINES", "LOAD", "LOCK", "LOOP",
        "MATCH", "MERGE", "MOD", "NATURAL", "NOT", "NULL", "NUMERIC", "OFFSET", "ON", "OPTION",
        "OR", "ORDER", "OUT", "OUTER", "PRECISION", "PRIMARY", "PROCEDURE", "PURGE", "RANGE",
        "READ", "REAL", "REFERENCES", "REGEXP", "RELEASE", "RENAME", "REPEAT", "REPLACE",
        "REQUIRE", "RESTRICT", "RETURN", "REVOKE", "RIGHT", "ROW", "ROWS", "SCHEMA",
        "SCHEMAS", "SELECT", "SET", "SHOW", "SMALLINT", "SQL", "START", "TABLE", "THEN", "TO",
        "TRAILING", "TRIGGER", "TRUE", "UNION", "UNIQUE", "UNLOCK", "UNSIGNED", "UPDATE",
        "USAGE", "USE", "USING", "VALUES", "VARCHAR", "VIEW", "WHEN", "WHERE", "WHILE", "WITH",
        "WRITE", "XOR",
    ]
    .into_iter()
    .collect()
});

static PHP_RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class",
        "clone", "const", "continue", "declare", "default", "do", "else", "elseif",
        "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "extends",
        "final", "finally", "for", "foreach", "function", "global", "goto", "if", "implements",
        "interface", "instanceof", "insteadof", "namespace", "new", "or", "private",
        "protected", "public", "static", "switch", "throw", "trait", "try", "use", "var",
        "while", "xor", "yield", "__class__", "__dir__", "__file__", "__line__",
        "__function__", "__method__", "__namespace__", "__trait__", "__halt_compiler", "die",
        "echo", "empty", "exit", "eval", "include", "include_once", "isset", "list", "require",
        "require_once", "return", "print", "unset",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` is a SQL keyword, case-insensitively
pub fn is_reserved_keyword(word: &str) -> bool {
    SQL_KEYWORDS.contains(word.to_ascii_uppercase().as_str())
}

/// Whether `word` is a PHP reserved word, case-insensitively
pub fn is_reserved_word(word: &str) -> bool {
    PHP_RESERVED_WORDS.contains(word.to_ascii_lowercase().as_str())
}
