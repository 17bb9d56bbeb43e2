// SQL grammar rules.
//
// Each rule is one production, written only in terms of the driver's
// `expect` and `branch`. One token of lookahead decides every choice.
//
//   statement   := (select | create | delete) ';'
//   select      := SELECT ('*' | Ident {',' Ident}) FROM Ident
//   create      := CREATE TABLE Ident '(' column-spec {column-spec} ')'
//   column-spec := Ident Ident ['(' Number ')'] [',']
//   delete      := DELETE '*' FROM Ident
//                | DELETE FROM Ident WHERE attribute {',' attribute}
//   attribute   := Ident '=' (Ident | Number)

use minisql_ast::{
    Assignment, ColumnSpec, CreateTableStatement, DeleteFilter, DeleteStatement, SelectColumns,
    SelectStatement, Statement,
};
use minisql_engine::Driver;
use minisql_error::SyntaxError;
use tracing::{debug, debug_span};

use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Parse exactly one statement; anything after its `;` is an error.
pub fn parse(sql: &str) -> Result<Statement, SyntaxError> {
    let mut parser = Parser::from_sql(sql);
    let stmt = parser.parse_statement()?;
    parser.finish()?;
    Ok(stmt)
}

/// Parse a buffer of `;`-terminated statements, stopping at the first error.
pub fn parse_script(sql: &str) -> Result<Vec<Statement>, SyntaxError> {
    let mut parser = Parser::from_sql(sql);
    let mut stmts = Vec::new();
    while let Some(stmt) = parser.next_statement()? {
        stmts.push(stmt);
    }
    parser.finish()?;
    Ok(stmts)
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

pub struct Parser<'a> {
    driver: Driver<TokenKind, Lexer<'a>>,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            driver: Driver::new(lexer),
        }
    }

    #[must_use]
    pub fn from_sql(sql: &'a str) -> Self {
        Self::new(Lexer::new(sql))
    }

    /// `statement := (select | create | delete) ';'`
    pub fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        let at = self.driver.location();
        let _span = debug_span!("parse_statement", line = at.line, col = at.col).entered();

        let stmt = match self.driver.branch(&TokenKind::STATEMENT_STARTS)? {
            TokenKind::KwSelect => Statement::Select(self.select()?),
            TokenKind::KwCreate => Statement::CreateTable(self.create_table()?),
            TokenKind::KwDelete => Statement::Delete(self.delete()?),
            _ => return Err(self.driver.unexpected(&TokenKind::STATEMENT_STARTS)),
        };
        self.driver.expect(TokenKind::Semicolon)?;

        debug!(tag = stmt.tag(), table = stmt.table(), "parsed statement");
        Ok(stmt)
    }

    /// Next statement of a script, or `None` once only end of input is left.
    pub fn next_statement(&mut self) -> Result<Option<Statement>, SyntaxError> {
        let [select, create, delete] = TokenKind::STATEMENT_STARTS;
        match self
            .driver
            .branch(&[select, create, delete, TokenKind::End])?
        {
            TokenKind::End => Ok(None),
            _ => self.parse_statement().map(Some),
        }
    }

    /// Require end of input.
    pub fn finish(self) -> Result<(), SyntaxError> {
        self.driver.finish()
    }

    // -----------------------------------------------------------------------
    // SELECT
    // -----------------------------------------------------------------------

    fn select(&mut self) -> Result<SelectStatement, SyntaxError> {
        self.driver.expect(TokenKind::KwSelect)?;
        let columns = match self.driver.branch(&[TokenKind::Star, TokenKind::Ident])? {
            TokenKind::Star => {
                self.driver.expect(TokenKind::Star)?;
                SelectColumns::All
            }
            _ => {
                let mut names = Vec::new();
                loop {
                    names.push(self.driver.expect(TokenKind::Ident)?);
                    if self.driver.branch(&[TokenKind::Comma, TokenKind::KwFrom])?
                        == TokenKind::KwFrom
                    {
                        break;
                    }
                    self.driver.expect(TokenKind::Comma)?;
                }
                SelectColumns::Named(names)
            }
        };
        self.driver.expect(TokenKind::KwFrom)?;
        let table = self.driver.expect(TokenKind::Ident)?;
        Ok(SelectStatement { columns, table })
    }

    // -----------------------------------------------------------------------
    // CREATE TABLE
    // -----------------------------------------------------------------------

    fn create_table(&mut self) -> Result<CreateTableStatement, SyntaxError> {
        self.driver.expect(TokenKind::KwCreate)?;
        self.driver.expect(TokenKind::KwTable)?;
        let table = self.driver.expect(TokenKind::Ident)?;
        self.driver.expect(TokenKind::LeftParen)?;
        let mut columns = Vec::new();
        loop {
            columns.push(self.column_spec()?);
            if self.driver.branch(&[TokenKind::RightParen, TokenKind::Ident])?
                == TokenKind::RightParen
            {
                break;
            }
        }
        self.driver.expect(TokenKind::RightParen)?;
        Ok(CreateTableStatement { table, columns })
    }

    /// A column spec swallows its own trailing comma, so `(a int,)` is
    /// accepted.
    fn column_spec(&mut self) -> Result<ColumnSpec, SyntaxError> {
        let name = self.driver.expect(TokenKind::Ident)?;
        let type_name = self.driver.expect(TokenKind::Ident)?;
        let mut size = None;
        let mut next = self.driver.branch(&[
            TokenKind::Comma,
            TokenKind::LeftParen,
            TokenKind::RightParen,
        ])?;
        if next == TokenKind::LeftParen {
            self.driver.expect(TokenKind::LeftParen)?;
            size = Some(self.driver.expect(TokenKind::Number)?);
            self.driver.expect(TokenKind::RightParen)?;
            next = self
                .driver
                .branch(&[TokenKind::Comma, TokenKind::RightParen])?;
        }
        if next == TokenKind::Comma {
            self.driver.expect(TokenKind::Comma)?;
        }
        Ok(ColumnSpec {
            name,
            type_name,
            size,
        })
    }

    // -----------------------------------------------------------------------
    // DELETE
    // -----------------------------------------------------------------------

    fn delete(&mut self) -> Result<DeleteStatement, SyntaxError> {
        self.driver.expect(TokenKind::KwDelete)?;
        let all = self.driver.branch(&[TokenKind::Star, TokenKind::KwFrom])? == TokenKind::Star;
        if all {
            self.driver.expect(TokenKind::Star)?;
        }
        self.driver.expect(TokenKind::KwFrom)?;
        let table = self.driver.expect(TokenKind::Ident)?;
        if all {
            // A WHERE here is left for the statement terminator to reject.
            return Ok(DeleteStatement {
                table,
                filter: DeleteFilter::All,
            });
        }

        self.driver.expect(TokenKind::KwWhere)?;
        let mut attributes = Vec::new();
        loop {
            attributes.push(self.attribute()?);
            if self
                .driver
                .branch(&[TokenKind::Comma, TokenKind::Semicolon])?
                == TokenKind::Semicolon
            {
                break;
            }
            self.driver.expect(TokenKind::Comma)?;
        }
        Ok(DeleteStatement {
            table,
            filter: DeleteFilter::Matching(attributes),
        })
    }

    fn attribute(&mut self) -> Result<Assignment, SyntaxError> {
        let key = self.driver.expect(TokenKind::Ident)?;
        self.driver.expect(TokenKind::Equals)?;
        let value_kind = self
            .driver
            .branch(&[TokenKind::Ident, TokenKind::Number])?;
        let value = self.driver.expect(value_kind)?;
        Ok(Assignment { key, value })
    }
}
