/*!
# Programs and Expressions

A program is plain text. Every line begins with a line number and
holds one statement. Lines run in the order they appear in the text,
not in line number order, and a `GOTO` lands on the first line that
carries the requested number.

```text
10 let a = 6
20 print "a times 7 is", a * 7
30 end
```

Keywords are lowercase. Whitespace between tokens is optional, so
`10 goto100` is the same as `10 goto 100`. `rem` turns the rest of
the line into a comment.

## Values

There is one type: the signed 32 bit integer. Number literals have at
most six digits. There are no negative literals; write `0-5`.

## Variables

The 26 variables `a` through `z` always exist and start at zero.

## Operators

From lowest to highest precedence. Operators in one group associate
left to right.

| Operators | Meaning |
|-----------|---------|
| `<` `>` `=` | Comparison, 1 for true and 0 for false |
| `+` `-` `&` `\|` | Sum, difference, bitwise and, bitwise or |
| `*` `/` `%` | Product, quotient and remainder, truncating toward zero |

Parentheses group. They nest at most sixteen deep. Arithmetic that
leaves the 32 bit range stops the program with `OVERFLOW`, and a zero
divisor stops it with `DIVISION BY ZERO`.

## Errors

Errors print as a code, the line number and the byte range within
the line:

```text
?SYNTAX ERROR IN 20 (4..5); EXPECTED EQUAL
```

Running out of `GOSUB` or `FOR` stack space is reported and the
program carries on at the next line. Every other error ends the run.

*/
