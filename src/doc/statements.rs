/*!
# Statements

## `let` *variable* `=` *expression*

Assigns a value. The word `let` may be left out.

## `print` [*item*] [`,` | `;` *item*]...

Items are string literals or expressions. A comma prints a space,
a semicolon prints nothing. A newline always follows. Strings longer
than 40 bytes are cut short.

## `if` *relation* `then` *statement* [`else` *statement*]

The statement after `then` runs when the relation is nonzero,
otherwise the one after `else`, if any.

## `goto` *expression*

Continues at the line with the computed number.

## `gosub` *line* / `return`

`gosub` takes a literal line number and remembers where to come back
to. Ten calls may be pending. `return` with nothing pending does
nothing.

## `for` *variable* `=` *expression* `to` *expression* / `next` *variable*

The loop body always runs once. `next` adds one and repeats while the
variable is not above the bound. Four loops may be nested. A `next`
naming a different variable than the innermost loop is ignored.

## `peek` *address* `,` *variable* / `poke` *address* `,` *expression*

Reads or writes the host's memory. The terminal provides 64K bytes.

## `end`

Stops the program. Running past the last line does the same.

*/
