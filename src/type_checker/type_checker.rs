use tracing::debug;

use crate::{
    ast::{
        ast::{Expr, Identifier, Program, Stmt},
        statements::{AssignmentStmt, VarDeclStmt},
        types::{LangOper, TypeDescriptor, TypeTag},
    },
    errors::errors::{Error, ErrorImpl},
    symbol_table::symbol_table::{Attributes, SymbolTable},
    Session,
};

/// Semantic analysis over one program.
///
/// Every check returns the resolved descriptor of the node it visited.
/// Errors do not stop the traversal; they are recorded in a single slot
/// and the last one recorded wins.
pub struct TypeChecker<'a> {
    symbol_table: &'a mut SymbolTable,
    last_error: Option<Error>,
}

impl<'a> TypeChecker<'a> {
    pub fn new(symbol_table: &'a mut SymbolTable) -> Self {
        TypeChecker {
            symbol_table,
            last_error: None,
        }
    }

    pub fn check_program(&mut self, program: &mut Program) {
        for stmt in program.iter_mut() {
            self.check_stmt(stmt);
        }
    }

    pub fn check_stmt(&mut self, stmt: &mut Stmt) -> TypeDescriptor {
        match stmt {
            Stmt::VarDecl(decl) => self.check_var_decl(decl),
            Stmt::Assignment(assignment) => self.check_assignment(assignment),
            Stmt::Print(print) => {
                let resolved = self.check_identifier(&print.identifier);
                if resolved.is_error() {
                    // Already recorded while resolving the identifier
                    return resolved;
                }

                TypeDescriptor::ok()
            }
        }
    }

    pub fn check_expr(&mut self, expr: &mut Expr) -> TypeDescriptor {
        match expr {
            Expr::Constant(constant) => constant.literal_type.into(),
            Expr::Deref(deref) => self.check_identifier(&deref.identifier),
            Expr::Binary(binary) => {
                let left = self.check_expr(&mut binary.left);
                let right = self.check_expr(&mut binary.right);

                if left.is_error() {
                    return left;
                }
                if right.is_error() {
                    return right;
                }

                let is_float = left.is_float() || right.is_float();

                if binary.operator == LangOper::Div && is_float {
                    debug!("rewriting division to float division");
                    binary.operator = LangOper::DivFloat;
                }

                if is_float {
                    TypeDescriptor::new(TypeTag::Float)
                } else {
                    TypeDescriptor::new(TypeTag::Int)
                }
            }
        }
    }

    fn check_var_decl(&mut self, decl: &mut VarDeclStmt) -> TypeDescriptor {
        let name = decl.identifier.name.clone();
        let row = decl.identifier.row;

        if let Err(error) = self
            .symbol_table
            .enter(Attributes::new(decl.var_type, name.clone()), row)
        {
            return self.report(error);
        }

        let declared: TypeDescriptor = decl.var_type.into();
        debug!(variable = %name, var_type = %decl.var_type, "declared");

        let Some(value) = decl.assigned_value.as_mut() else {
            return TypeDescriptor::ok();
        };

        let initializer = self.check_expr(value);
        self.check_store(&name, row, &declared, initializer)
    }

    fn check_assignment(&mut self, assignment: &mut AssignmentStmt) -> TypeDescriptor {
        let target = self.check_identifier(&assignment.identifier);
        let value = self.check_expr(&mut assignment.value);

        if target.is_error() {
            return target;
        }

        debug!(variable = %assignment.identifier, "assignment");
        self.check_store(
            &assignment.identifier.name,
            assignment.identifier.row,
            &target,
            value,
        )
    }

    /// Validates storing a value of type `value` into a variable of type `target`.
    fn check_store(
        &mut self,
        name: &str,
        row: u32,
        target: &TypeDescriptor,
        value: TypeDescriptor,
    ) -> TypeDescriptor {
        if value.is_error() {
            return value;
        }

        if !value.is_compatible_with(target) {
            return self.report(Error::new(
                ErrorImpl::TypeMatchError {
                    variable: name.to_string(),
                    expected: target.tag,
                    received: value.tag,
                },
                row,
            ));
        }

        TypeDescriptor::ok()
    }

    fn check_identifier(&mut self, identifier: &Identifier) -> TypeDescriptor {
        match self.symbol_table.lookup(&identifier.name) {
            Some(attributes) => attributes.var_type.into(),
            None => self.report(Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: identifier.name.clone(),
                },
                identifier.row,
            )),
        }
    }

    fn report(&mut self, error: Error) -> TypeDescriptor {
        debug!(row = error.get_row(), "semantic error: {}", error.get_message());

        let descriptor = TypeDescriptor::error(error.get_message(), error.get_row());
        self.last_error = Some(error);
        descriptor
    }

    /// The most recently recorded error, if any.
    pub fn get_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    pub fn get_error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(|error| error.get_message())
    }

    pub fn into_error(self) -> Option<Error> {
        self.last_error
    }
}

/// Type checks a program, rebuilding the session's symbol table from scratch.
///
/// Division nodes with a float operand are rewritten in place. Returns the
/// last semantic error encountered, or None when the program is well typed.
pub fn type_check(program: &mut Program, session: &mut Session) -> Option<Error> {
    session.symbol_table = SymbolTable::new();

    let mut type_checker = TypeChecker::new(&mut session.symbol_table);
    type_checker.check_program(program);

    type_checker.into_error()
}
