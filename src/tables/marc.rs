//! USMARC / ANSEL character table.
//!
//! Combining diacritics occupy `0xE0..=0xFE`; `0xEC`, `0xFB`, `0xFC` and `0xFD`
//! are unassigned. Precomposed letters are stored diacritic-first.

/// Unicode scalar value to legacy byte sequence, in declaration order.
///
/// Order is significant: when two scalar values share a byte sequence the
/// earlier entry becomes the decode target.
#[rustfmt::skip]
pub(crate) static MARC_ENTRIES: &[(char, &[u8])] = &[
    ('\u{001b}', b"\x1b"), // <control>
    ('\u{001d}', b"\x1d"), // <control>
    ('\u{001e}', b"\x1e"), // <control>
    ('\u{001f}', b"\x1f"), // <control>
    ('\u{0020}', b" "), // SPACE
    ('\u{0021}', b"!"), // EXCLAMATION MARK
    ('\u{0022}', b"\x22"), // QUOTATION MARK
    ('\u{0023}', b"#"), // NUMBER SIGN
    ('\u{0024}', b"$"), // DOLLAR SIGN
    ('\u{0025}', b"%"), // PERCENT SIGN
    ('\u{0026}', b"&"), // AMPERSAND
    ('\u{0027}', b"'"), // APOSTROPHE
    ('\u{0028}', b"("), // LEFT PARENTHESIS
    ('\u{0029}', b")"), // RIGHT PARENTHESIS
    ('\u{002a}', b"*"), // ASTERISK
    ('\u{002b}', b"+"), // PLUS SIGN
    ('\u{002c}', b","), // COMMA
    ('\u{002d}', b"-"), // HYPHEN-MINUS
    ('\u{002e}', b"."), // FULL STOP
    ('\u{002f}', b"/"), // SOLIDUS
    ('\u{0030}', b"0"), // DIGIT ZERO
    ('\u{0031}', b"1"), // DIGIT ONE
    ('\u{0032}', b"2"), // DIGIT TWO
    ('\u{0033}', b"3"), // DIGIT THREE
    ('\u{0034}', b"4"), // DIGIT FOUR
    ('\u{0035}', b"5"), // DIGIT FIVE
    ('\u{0036}', b"6"), // DIGIT SIX
    ('\u{0037}', b"7"), // DIGIT SEVEN
    ('\u{0038}', b"8"), // DIGIT EIGHT
    ('\u{0039}', b"9"), // DIGIT NINE
    ('\u{003a}', b":"), // COLON
    ('\u{003b}', b";"), // SEMICOLON
    ('\u{003c}', b"<"), // LESS-THAN SIGN
    ('\u{003d}', b"="), // EQUALS SIGN
    ('\u{003e}', b">"), // GREATER-THAN SIGN
    ('\u{003f}', b"?"), // QUESTION MARK
    ('\u{0040}', b"@"), // COMMERCIAL AT
    ('\u{0041}', b"A"), // LATIN CAPITAL LETTER A
    ('\u{0042}', b"B"), // LATIN CAPITAL LETTER B
    ('\u{0043}', b"C"), // LATIN CAPITAL LETTER C
    ('\u{0044}', b"D"), // LATIN CAPITAL LETTER D
    ('\u{0045}', b"E"), // LATIN CAPITAL LETTER E
    ('\u{0046}', b"F"), // LATIN CAPITAL LETTER F
    ('\u{0047}', b"G"), // LATIN CAPITAL LETTER G
    ('\u{0048}', b"H"), // LATIN CAPITAL LETTER H
    ('\u{0049}', b"I"), // LATIN CAPITAL LETTER I
    ('\u{004a}', b"J"), // LATIN CAPITAL LETTER J
    ('\u{004b}', b"K"), // LATIN CAPITAL LETTER K
    ('\u{004c}', b"L"), // LATIN CAPITAL LETTER L
    ('\u{004d}', b"M"), // LATIN CAPITAL LETTER M
    ('\u{004e}', b"N"), // LATIN CAPITAL LETTER N
    ('\u{004f}', b"O"), // LATIN CAPITAL LETTER O
    ('\u{0050}', b"P"), // LATIN CAPITAL LETTER P
    ('\u{0051}', b"Q"), // LATIN CAPITAL LETTER Q
    ('\u{0052}', b"R"), // LATIN CAPITAL LETTER R
    ('\u{0053}', b"S"), // LATIN CAPITAL LETTER S
    ('\u{0054}', b"T"), // LATIN CAPITAL LETTER T
    ('\u{0055}', b"U"), // LATIN CAPITAL LETTER U
    ('\u{0056}', b"V"), // LATIN CAPITAL LETTER V
    ('\u{0057}', b"W"), // LATIN CAPITAL LETTER W
    ('\u{0058}', b"X"), // LATIN CAPITAL LETTER X
    ('\u{0059}', b"Y"), // LATIN CAPITAL LETTER Y
    ('\u{005a}', b"Z"), // LATIN CAPITAL LETTER Z
    ('\u{005b}', b"["), // LEFT SQUARE BRACKET
    ('\u{005c}', b"\x5c"), // REVERSE SOLIDUS
    ('\u{005d}', b"]"), // RIGHT SQUARE BRACKET
    ('\u{005e}', b"^"), // CIRCUMFLEX ACCENT
    ('\u{005f}', b"_"), // LOW LINE
    ('\u{0060}', b"`"), // GRAVE ACCENT
    ('\u{0061}', b"a"), // LATIN SMALL LETTER A
    ('\u{0062}', b"b"), // LATIN SMALL LETTER B
    ('\u{0063}', b"c"), // LATIN SMALL LETTER C
    ('\u{0064}', b"d"), // LATIN SMALL LETTER D
    ('\u{0065}', b"e"), // LATIN SMALL LETTER E
    ('\u{0066}', b"f"), // LATIN SMALL LETTER F
    ('\u{0067}', b"g"), // LATIN SMALL LETTER G
    ('\u{0068}', b"h"), // LATIN SMALL LETTER H
    ('\u{0069}', b"i"), // LATIN SMALL LETTER I
    ('\u{006a}', b"j"), // LATIN SMALL LETTER J
    ('\u{006b}', b"k"), // LATIN SMALL LETTER K
    ('\u{006c}', b"l"), // LATIN SMALL LETTER L
    ('\u{006d}', b"m"), // LATIN SMALL LETTER M
    ('\u{006e}', b"n"), // LATIN SMALL LETTER N
    ('\u{006f}', b"o"), // LATIN SMALL LETTER O
    ('\u{0070}', b"p"), // LATIN SMALL LETTER P
    ('\u{0071}', b"q"), // LATIN SMALL LETTER Q
    ('\u{0072}', b"r"), // LATIN SMALL LETTER R
    ('\u{0073}', b"s"), // LATIN SMALL LETTER S
    ('\u{0074}', b"t"), // LATIN SMALL LETTER T
    ('\u{0075}', b"u"), // LATIN SMALL LETTER U
    ('\u{0076}', b"v"), // LATIN SMALL LETTER V
    ('\u{0077}', b"w"), // LATIN SMALL LETTER W
    ('\u{0078}', b"x"), // LATIN SMALL LETTER X
    ('\u{0079}', b"y"), // LATIN SMALL LETTER Y
    ('\u{007a}', b"z"), // LATIN SMALL LETTER Z
    ('\u{007b}', b"{"), // LEFT CURLY BRACKET
    ('\u{007c}', b"|"), // VERTICAL LINE
    ('\u{007d}', b"}"), // RIGHT CURLY BRACKET
    ('\u{007e}', b"~"), // TILDE
    ('\u{0098}', b"\x88"), // <control>
    ('\u{009c}', b"\x89"), // <control>
    ('\u{00a1}', b"\xc6"), // INVERTED EXCLAMATION MARK
    ('\u{00a3}', b"\xb9"), // POUND SIGN
    ('\u{00a9}', b"\xc3"), // COPYRIGHT SIGN
    ('\u{00ae}', b"\xaa"), // REGISTERED SIGN
    ('\u{00b0}', b"\xc0"), // DEGREE SIGN
    ('\u{00b1}', b"\xab"), // PLUS-MINUS SIGN
    ('\u{00b7}', b"\xa8"), // MIDDLE DOT
    ('\u{00bf}', b"\xc5"), // INVERTED QUESTION MARK
    ('\u{00c0}', b"\xe1A"), // LATIN CAPITAL LETTER A WITH GRAVE
    ('\u{00c1}', b"\xe2A"), // LATIN CAPITAL LETTER A WITH ACUTE
    ('\u{00c2}', b"\xe3A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX
    ('\u{00c3}', b"\xe4A"), // LATIN CAPITAL LETTER A WITH TILDE
    ('\u{00c4}', b"\xe8A"), // LATIN CAPITAL LETTER A WITH DIAERESIS
    ('\u{00c5}', b"\xeaA"), // LATIN CAPITAL LETTER A WITH RING ABOVE
    ('\u{00c6}', b"\xa5"), // LATIN CAPITAL LETTER AE
    ('\u{00c7}', b"\xf0C"), // LATIN CAPITAL LETTER C WITH CEDILLA
    ('\u{00c8}', b"\xe1E"), // LATIN CAPITAL LETTER E WITH GRAVE
    ('\u{00c9}', b"\xe2E"), // LATIN CAPITAL LETTER E WITH ACUTE
    ('\u{00ca}', b"\xe3E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX
    ('\u{00cb}', b"\xe8E"), // LATIN CAPITAL LETTER E WITH DIAERESIS
    ('\u{00cc}', b"\xe1I"), // LATIN CAPITAL LETTER I WITH GRAVE
    ('\u{00cd}', b"\xe2I"), // LATIN CAPITAL LETTER I WITH ACUTE
    ('\u{00ce}', b"\xe3I"), // LATIN CAPITAL LETTER I WITH CIRCUMFLEX
    ('\u{00cf}', b"\xe8I"), // LATIN CAPITAL LETTER I WITH DIAERESIS
    ('\u{00d1}', b"\xe4N"), // LATIN CAPITAL LETTER N WITH TILDE
    ('\u{00d2}', b"\xe1O"), // LATIN CAPITAL LETTER O WITH GRAVE
    ('\u{00d3}', b"\xe2O"), // LATIN CAPITAL LETTER O WITH ACUTE
    ('\u{00d4}', b"\xe3O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX
    ('\u{00d5}', b"\xe4O"), // LATIN CAPITAL LETTER O WITH TILDE
    ('\u{00d6}', b"\xe8O"), // LATIN CAPITAL LETTER O WITH DIAERESIS
    ('\u{00d8}', b"\xa2"), // LATIN CAPITAL LETTER O WITH STROKE
    ('\u{00d9}', b"\xe1U"), // LATIN CAPITAL LETTER U WITH GRAVE
    ('\u{00da}', b"\xe2U"), // LATIN CAPITAL LETTER U WITH ACUTE
    ('\u{00db}', b"\xe3U"), // LATIN CAPITAL LETTER U WITH CIRCUMFLEX
    ('\u{00dc}', b"\xe8U"), // LATIN CAPITAL LETTER U WITH DIAERESIS
    ('\u{00dd}', b"\xe2Y"), // LATIN CAPITAL LETTER Y WITH ACUTE
    ('\u{00de}', b"\xa4"), // LATIN CAPITAL LETTER THORN
    ('\u{00df}', b"\xc7"), // LATIN SMALL LETTER SHARP S
    ('\u{00e0}', b"\xe1a"), // LATIN SMALL LETTER A WITH GRAVE
    ('\u{00e1}', b"\xe2a"), // LATIN SMALL LETTER A WITH ACUTE
    ('\u{00e2}', b"\xe3a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX
    ('\u{00e3}', b"\xe4a"), // LATIN SMALL LETTER A WITH TILDE
    ('\u{00e4}', b"\xe8a"), // LATIN SMALL LETTER A WITH DIAERESIS
    ('\u{00e5}', b"\xeaa"), // LATIN SMALL LETTER A WITH RING ABOVE
    ('\u{00e6}', b"\xb5"), // LATIN SMALL LETTER AE
    ('\u{00e7}', b"\xf0c"), // LATIN SMALL LETTER C WITH CEDILLA
    ('\u{00e8}', b"\xe1e"), // LATIN SMALL LETTER E WITH GRAVE
    ('\u{00e9}', b"\xe2e"), // LATIN SMALL LETTER E WITH ACUTE
    ('\u{00ea}', b"\xe3e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX
    ('\u{00eb}', b"\xe8e"), // LATIN SMALL LETTER E WITH DIAERESIS
    ('\u{00ec}', b"\xe1i"), // LATIN SMALL LETTER I WITH GRAVE
    ('\u{00ed}', b"\xe2i"), // LATIN SMALL LETTER I WITH ACUTE
    ('\u{00ee}', b"\xe3i"), // LATIN SMALL LETTER I WITH CIRCUMFLEX
    ('\u{00ef}', b"\xe8i"), // LATIN SMALL LETTER I WITH DIAERESIS
    ('\u{00f0}', b"\xba"), // LATIN SMALL LETTER ETH
    ('\u{00f1}', b"\xe4n"), // LATIN SMALL LETTER N WITH TILDE
    ('\u{00f2}', b"\xe1o"), // LATIN SMALL LETTER O WITH GRAVE
    ('\u{00f3}', b"\xe2o"), // LATIN SMALL LETTER O WITH ACUTE
    ('\u{00f4}', b"\xe3o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX
    ('\u{00f5}', b"\xe4o"), // LATIN SMALL LETTER O WITH TILDE
    ('\u{00f6}', b"\xe8o"), // LATIN SMALL LETTER O WITH DIAERESIS
    ('\u{00f8}', b"\xb2"), // LATIN SMALL LETTER O WITH STROKE
    ('\u{00f9}', b"\xe1u"), // LATIN SMALL LETTER U WITH GRAVE
    ('\u{00fa}', b"\xe2u"), // LATIN SMALL LETTER U WITH ACUTE
    ('\u{00fb}', b"\xe3u"), // LATIN SMALL LETTER U WITH CIRCUMFLEX
    ('\u{00fc}', b"\xe8u"), // LATIN SMALL LETTER U WITH DIAERESIS
    ('\u{00fd}', b"\xe2y"), // LATIN SMALL LETTER Y WITH ACUTE
    ('\u{00fe}', b"\xb4"), // LATIN SMALL LETTER THORN
    ('\u{00ff}', b"\xe8y"), // LATIN SMALL LETTER Y WITH DIAERESIS
    ('\u{0100}', b"\xe5A"), // LATIN CAPITAL LETTER A WITH MACRON
    ('\u{0101}', b"\xe5a"), // LATIN SMALL LETTER A WITH MACRON
    ('\u{0102}', b"\xe6A"), // LATIN CAPITAL LETTER A WITH BREVE
    ('\u{0103}', b"\xe6a"), // LATIN SMALL LETTER A WITH BREVE
    ('\u{0104}', b"\xf1A"), // LATIN CAPITAL LETTER A WITH OGONEK
    ('\u{0105}', b"\xf1a"), // LATIN SMALL LETTER A WITH OGONEK
    ('\u{0106}', b"\xe2C"), // LATIN CAPITAL LETTER C WITH ACUTE
    ('\u{0107}', b"\xe2c"), // LATIN SMALL LETTER C WITH ACUTE
    ('\u{0108}', b"\xe3C"), // LATIN CAPITAL LETTER C WITH CIRCUMFLEX
    ('\u{0109}', b"\xe3c"), // LATIN SMALL LETTER C WITH CIRCUMFLEX
    ('\u{010a}', b"\xe7C"), // LATIN CAPITAL LETTER C WITH DOT ABOVE
    ('\u{010b}', b"\xe7c"), // LATIN SMALL LETTER C WITH DOT ABOVE
    ('\u{010c}', b"\xe9C"), // LATIN CAPITAL LETTER C WITH CARON
    ('\u{010d}', b"\xe9c"), // LATIN SMALL LETTER C WITH CARON
    ('\u{010e}', b"\xe9D"), // LATIN CAPITAL LETTER D WITH CARON
    ('\u{010f}', b"\xe9d"), // LATIN SMALL LETTER D WITH CARON
    ('\u{0110}', b"\xa3"), // LATIN CAPITAL LETTER D WITH STROKE
    ('\u{0111}', b"\xb3"), // LATIN SMALL LETTER D WITH STROKE
    ('\u{0112}', b"\xe5E"), // LATIN CAPITAL LETTER E WITH MACRON
    ('\u{0113}', b"\xe5e"), // LATIN SMALL LETTER E WITH MACRON
    ('\u{0114}', b"\xe6E"), // LATIN CAPITAL LETTER E WITH BREVE
    ('\u{0115}', b"\xe6e"), // LATIN SMALL LETTER E WITH BREVE
    ('\u{0116}', b"\xe7E"), // LATIN CAPITAL LETTER E WITH DOT ABOVE
    ('\u{0117}', b"\xe7e"), // LATIN SMALL LETTER E WITH DOT ABOVE
    ('\u{0118}', b"\xf1E"), // LATIN CAPITAL LETTER E WITH OGONEK
    ('\u{0119}', b"\xf1e"), // LATIN SMALL LETTER E WITH OGONEK
    ('\u{011a}', b"\xe9E"), // LATIN CAPITAL LETTER E WITH CARON
    ('\u{011b}', b"\xe9e"), // LATIN SMALL LETTER E WITH CARON
    ('\u{011c}', b"\xe3G"), // LATIN CAPITAL LETTER G WITH CIRCUMFLEX
    ('\u{011d}', b"\xe3g"), // LATIN SMALL LETTER G WITH CIRCUMFLEX
    ('\u{011e}', b"\xe6G"), // LATIN CAPITAL LETTER G WITH BREVE
    ('\u{011f}', b"\xe6g"), // LATIN SMALL LETTER G WITH BREVE
    ('\u{0120}', b"\xe7G"), // LATIN CAPITAL LETTER G WITH DOT ABOVE
    ('\u{0121}', b"\xe7g"), // LATIN SMALL LETTER G WITH DOT ABOVE
    ('\u{0122}', b"\xf0G"), // LATIN CAPITAL LETTER G WITH CEDILLA
    ('\u{0123}', b"\xf0g"), // LATIN SMALL LETTER G WITH CEDILLA
    ('\u{0124}', b"\xe3H"), // LATIN CAPITAL LETTER H WITH CIRCUMFLEX
    ('\u{0125}', b"\xe3h"), // LATIN SMALL LETTER H WITH CIRCUMFLEX
    ('\u{0128}', b"\xe4I"), // LATIN CAPITAL LETTER I WITH TILDE
    ('\u{0129}', b"\xe4i"), // LATIN SMALL LETTER I WITH TILDE
    ('\u{012a}', b"\xe5I"), // LATIN CAPITAL LETTER I WITH MACRON
    ('\u{012b}', b"\xe5i"), // LATIN SMALL LETTER I WITH MACRON
    ('\u{012c}', b"\xe6I"), // LATIN CAPITAL LETTER I WITH BREVE
    ('\u{012d}', b"\xe6i"), // LATIN SMALL LETTER I WITH BREVE
    ('\u{012e}', b"\xf1I"), // LATIN CAPITAL LETTER I WITH OGONEK
    ('\u{012f}', b"\xf1i"), // LATIN SMALL LETTER I WITH OGONEK
    ('\u{0130}', b"\xe7I"), // LATIN CAPITAL LETTER I WITH DOT ABOVE
    ('\u{0131}', b"\xb8"), // LATIN SMALL LETTER DOTLESS I
    ('\u{0134}', b"\xe3J"), // LATIN CAPITAL LETTER J WITH CIRCUMFLEX
    ('\u{0135}', b"\xe3j"), // LATIN SMALL LETTER J WITH CIRCUMFLEX
    ('\u{0136}', b"\xf0K"), // LATIN CAPITAL LETTER K WITH CEDILLA
    ('\u{0137}', b"\xf0k"), // LATIN SMALL LETTER K WITH CEDILLA
    ('\u{0139}', b"\xe2L"), // LATIN CAPITAL LETTER L WITH ACUTE
    ('\u{013a}', b"\xe2l"), // LATIN SMALL LETTER L WITH ACUTE
    ('\u{013b}', b"\xf0L"), // LATIN CAPITAL LETTER L WITH CEDILLA
    ('\u{013c}', b"\xf0l"), // LATIN SMALL LETTER L WITH CEDILLA
    ('\u{013d}', b"\xe9L"), // LATIN CAPITAL LETTER L WITH CARON
    ('\u{013e}', b"\xe9l"), // LATIN SMALL LETTER L WITH CARON
    ('\u{0141}', b"\xa1"), // LATIN CAPITAL LETTER L WITH STROKE
    ('\u{0142}', b"\xb1"), // LATIN SMALL LETTER L WITH STROKE
    ('\u{0143}', b"\xe2N"), // LATIN CAPITAL LETTER N WITH ACUTE
    ('\u{0144}', b"\xe2n"), // LATIN SMALL LETTER N WITH ACUTE
    ('\u{0145}', b"\xf0N"), // LATIN CAPITAL LETTER N WITH CEDILLA
    ('\u{0146}', b"\xf0n"), // LATIN SMALL LETTER N WITH CEDILLA
    ('\u{0147}', b"\xe9N"), // LATIN CAPITAL LETTER N WITH CARON
    ('\u{0148}', b"\xe9n"), // LATIN SMALL LETTER N WITH CARON
    ('\u{014c}', b"\xe5O"), // LATIN CAPITAL LETTER O WITH MACRON
    ('\u{014d}', b"\xe5o"), // LATIN SMALL LETTER O WITH MACRON
    ('\u{014e}', b"\xe6O"), // LATIN CAPITAL LETTER O WITH BREVE
    ('\u{014f}', b"\xe6o"), // LATIN SMALL LETTER O WITH BREVE
    ('\u{0150}', b"\xeeO"), // LATIN CAPITAL LETTER O WITH DOUBLE ACUTE
    ('\u{0151}', b"\xeeo"), // LATIN SMALL LETTER O WITH DOUBLE ACUTE
    ('\u{0152}', b"\xa6"), // LATIN CAPITAL LIGATURE OE
    ('\u{0153}', b"\xb6"), // LATIN SMALL LIGATURE OE
    ('\u{0154}', b"\xe2R"), // LATIN CAPITAL LETTER R WITH ACUTE
    ('\u{0155}', b"\xe2r"), // LATIN SMALL LETTER R WITH ACUTE
    ('\u{0156}', b"\xf0R"), // LATIN CAPITAL LETTER R WITH CEDILLA
    ('\u{0157}', b"\xf0r"), // LATIN SMALL LETTER R WITH CEDILLA
    ('\u{0158}', b"\xe9R"), // LATIN CAPITAL LETTER R WITH CARON
    ('\u{0159}', b"\xe9r"), // LATIN SMALL LETTER R WITH CARON
    ('\u{015a}', b"\xe2S"), // LATIN CAPITAL LETTER S WITH ACUTE
    ('\u{015b}', b"\xe2s"), // LATIN SMALL LETTER S WITH ACUTE
    ('\u{015c}', b"\xe3S"), // LATIN CAPITAL LETTER S WITH CIRCUMFLEX
    ('\u{015d}', b"\xe3s"), // LATIN SMALL LETTER S WITH CIRCUMFLEX
    ('\u{015e}', b"\xf0S"), // LATIN CAPITAL LETTER S WITH CEDILLA
    ('\u{015f}', b"\xf0s"), // LATIN SMALL LETTER S WITH CEDILLA
    ('\u{0160}', b"\xe9S"), // LATIN CAPITAL LETTER S WITH CARON
    ('\u{0161}', b"\xe9s"), // LATIN SMALL LETTER S WITH CARON
    ('\u{0162}', b"\xf0T"), // LATIN CAPITAL LETTER T WITH CEDILLA
    ('\u{0163}', b"\xf0t"), // LATIN SMALL LETTER T WITH CEDILLA
    ('\u{0164}', b"\xe9T"), // LATIN CAPITAL LETTER T WITH CARON
    ('\u{0165}', b"\xe9t"), // LATIN SMALL LETTER T WITH CARON
    ('\u{0168}', b"\xe4U"), // LATIN CAPITAL LETTER U WITH TILDE
    ('\u{0169}', b"\xe4u"), // LATIN SMALL LETTER U WITH TILDE
    ('\u{016a}', b"\xe5U"), // LATIN CAPITAL LETTER U WITH MACRON
    ('\u{016b}', b"\xe5u"), // LATIN SMALL LETTER U WITH MACRON
    ('\u{016c}', b"\xe6U"), // LATIN CAPITAL LETTER U WITH BREVE
    ('\u{016d}', b"\xe6u"), // LATIN SMALL LETTER U WITH BREVE
    ('\u{016e}', b"\xeaU"), // LATIN CAPITAL LETTER U WITH RING ABOVE
    ('\u{016f}', b"\xeau"), // LATIN SMALL LETTER U WITH RING ABOVE
    ('\u{0170}', b"\xeeU"), // LATIN CAPITAL LETTER U WITH DOUBLE ACUTE
    ('\u{0171}', b"\xeeu"), // LATIN SMALL LETTER U WITH DOUBLE ACUTE
    ('\u{0172}', b"\xf1U"), // LATIN CAPITAL LETTER U WITH OGONEK
    ('\u{0173}', b"\xf1u"), // LATIN SMALL LETTER U WITH OGONEK
    ('\u{0174}', b"\xe3W"), // LATIN CAPITAL LETTER W WITH CIRCUMFLEX
    ('\u{0175}', b"\xe3w"), // LATIN SMALL LETTER W WITH CIRCUMFLEX
    ('\u{0176}', b"\xe3Y"), // LATIN CAPITAL LETTER Y WITH CIRCUMFLEX
    ('\u{0177}', b"\xe3y"), // LATIN SMALL LETTER Y WITH CIRCUMFLEX
    ('\u{0178}', b"\xe8Y"), // LATIN CAPITAL LETTER Y WITH DIAERESIS
    ('\u{0179}', b"\xe2Z"), // LATIN CAPITAL LETTER Z WITH ACUTE
    ('\u{017a}', b"\xe2z"), // LATIN SMALL LETTER Z WITH ACUTE
    ('\u{017b}', b"\xe7Z"), // LATIN CAPITAL LETTER Z WITH DOT ABOVE
    ('\u{017c}', b"\xe7z"), // LATIN SMALL LETTER Z WITH DOT ABOVE
    ('\u{017d}', b"\xe9Z"), // LATIN CAPITAL LETTER Z WITH CARON
    ('\u{017e}', b"\xe9z"), // LATIN SMALL LETTER Z WITH CARON
    ('\u{01a0}', b"\xac"), // LATIN CAPITAL LETTER O WITH HORN
    ('\u{01a1}', b"\xbc"), // LATIN SMALL LETTER O WITH HORN
    ('\u{01af}', b"\xad"), // LATIN CAPITAL LETTER U WITH HORN
    ('\u{01b0}', b"\xbd"), // LATIN SMALL LETTER U WITH HORN
    ('\u{01cd}', b"\xe9A"), // LATIN CAPITAL LETTER A WITH CARON
    ('\u{01ce}', b"\xe9a"), // LATIN SMALL LETTER A WITH CARON
    ('\u{01cf}', b"\xe9I"), // LATIN CAPITAL LETTER I WITH CARON
    ('\u{01d0}', b"\xe9i"), // LATIN SMALL LETTER I WITH CARON
    ('\u{01d1}', b"\xe9O"), // LATIN CAPITAL LETTER O WITH CARON
    ('\u{01d2}', b"\xe9o"), // LATIN SMALL LETTER O WITH CARON
    ('\u{01d3}', b"\xe9U"), // LATIN CAPITAL LETTER U WITH CARON
    ('\u{01d4}', b"\xe9u"), // LATIN SMALL LETTER U WITH CARON
    ('\u{01d5}', b"\xe5\xe8U"), // LATIN CAPITAL LETTER U WITH DIAERESIS AND MACRON
    ('\u{01d6}', b"\xe5\xe8u"), // LATIN SMALL LETTER U WITH DIAERESIS AND MACRON
    ('\u{01d7}', b"\xe2\xe8U"), // LATIN CAPITAL LETTER U WITH DIAERESIS AND ACUTE
    ('\u{01d8}', b"\xe2\xe8u"), // LATIN SMALL LETTER U WITH DIAERESIS AND ACUTE
    ('\u{01d9}', b"\xe9\xe8U"), // LATIN CAPITAL LETTER U WITH DIAERESIS AND CARON
    ('\u{01da}', b"\xe9\xe8u"), // LATIN SMALL LETTER U WITH DIAERESIS AND CARON
    ('\u{01db}', b"\xe1\xe8U"), // LATIN CAPITAL LETTER U WITH DIAERESIS AND GRAVE
    ('\u{01dc}', b"\xe1\xe8u"), // LATIN SMALL LETTER U WITH DIAERESIS AND GRAVE
    ('\u{01de}', b"\xe5\xe8A"), // LATIN CAPITAL LETTER A WITH DIAERESIS AND MACRON
    ('\u{01df}', b"\xe5\xe8a"), // LATIN SMALL LETTER A WITH DIAERESIS AND MACRON
    ('\u{01e0}', b"\xe5\xe7A"), // LATIN CAPITAL LETTER A WITH DOT ABOVE AND MACRON
    ('\u{01e1}', b"\xe5\xe7a"), // LATIN SMALL LETTER A WITH DOT ABOVE AND MACRON
    ('\u{01e2}', b"\xe5\xa5"), // LATIN CAPITAL LETTER AE WITH MACRON
    ('\u{01e3}', b"\xe5\xb5"), // LATIN SMALL LETTER AE WITH MACRON
    ('\u{01e6}', b"\xe9G"), // LATIN CAPITAL LETTER G WITH CARON
    ('\u{01e7}', b"\xe9g"), // LATIN SMALL LETTER G WITH CARON
    ('\u{01e8}', b"\xe9K"), // LATIN CAPITAL LETTER K WITH CARON
    ('\u{01e9}', b"\xe9k"), // LATIN SMALL LETTER K WITH CARON
    ('\u{01ea}', b"\xf1O"), // LATIN CAPITAL LETTER O WITH OGONEK
    ('\u{01eb}', b"\xf1o"), // LATIN SMALL LETTER O WITH OGONEK
    ('\u{01ec}', b"\xe5\xf1O"), // LATIN CAPITAL LETTER O WITH OGONEK AND MACRON
    ('\u{01ed}', b"\xe5\xf1o"), // LATIN SMALL LETTER O WITH OGONEK AND MACRON
    ('\u{01f0}', b"\xe9j"), // LATIN SMALL LETTER J WITH CARON
    ('\u{01f4}', b"\xe2G"), // LATIN CAPITAL LETTER G WITH ACUTE
    ('\u{01f5}', b"\xe2g"), // LATIN SMALL LETTER G WITH ACUTE
    ('\u{01f8}', b"\xe1N"), // LATIN CAPITAL LETTER N WITH GRAVE
    ('\u{01f9}', b"\xe1n"), // LATIN SMALL LETTER N WITH GRAVE
    ('\u{01fa}', b"\xe2\xeaA"), // LATIN CAPITAL LETTER A WITH RING ABOVE AND ACUTE
    ('\u{01fb}', b"\xe2\xeaa"), // LATIN SMALL LETTER A WITH RING ABOVE AND ACUTE
    ('\u{01fc}', b"\xe2\xa5"), // LATIN CAPITAL LETTER AE WITH ACUTE
    ('\u{01fd}', b"\xe2\xb5"), // LATIN SMALL LETTER AE WITH ACUTE
    ('\u{01fe}', b"\xe2\xa2"), // LATIN CAPITAL LETTER O WITH STROKE AND ACUTE
    ('\u{01ff}', b"\xe2\xb2"), // LATIN SMALL LETTER O WITH STROKE AND ACUTE
    ('\u{0218}', b"\xf7S"), // LATIN CAPITAL LETTER S WITH COMMA BELOW
    ('\u{0219}', b"\xf7s"), // LATIN SMALL LETTER S WITH COMMA BELOW
    ('\u{021a}', b"\xf7T"), // LATIN CAPITAL LETTER T WITH COMMA BELOW
    ('\u{021b}', b"\xf7t"), // LATIN SMALL LETTER T WITH COMMA BELOW
    ('\u{021e}', b"\xe9H"), // LATIN CAPITAL LETTER H WITH CARON
    ('\u{021f}', b"\xe9h"), // LATIN SMALL LETTER H WITH CARON
    ('\u{0226}', b"\xe7A"), // LATIN CAPITAL LETTER A WITH DOT ABOVE
    ('\u{0227}', b"\xe7a"), // LATIN SMALL LETTER A WITH DOT ABOVE
    ('\u{0228}', b"\xf0E"), // LATIN CAPITAL LETTER E WITH CEDILLA
    ('\u{0229}', b"\xf0e"), // LATIN SMALL LETTER E WITH CEDILLA
    ('\u{022a}', b"\xe5\xe8O"), // LATIN CAPITAL LETTER O WITH DIAERESIS AND MACRON
    ('\u{022b}', b"\xe5\xe8o"), // LATIN SMALL LETTER O WITH DIAERESIS AND MACRON
    ('\u{022c}', b"\xe5\xe4O"), // LATIN CAPITAL LETTER O WITH TILDE AND MACRON
    ('\u{022d}', b"\xe5\xe4o"), // LATIN SMALL LETTER O WITH TILDE AND MACRON
    ('\u{022e}', b"\xe7O"), // LATIN CAPITAL LETTER O WITH DOT ABOVE
    ('\u{022f}', b"\xe7o"), // LATIN SMALL LETTER O WITH DOT ABOVE
    ('\u{0230}', b"\xe5\xe7O"), // LATIN CAPITAL LETTER O WITH DOT ABOVE AND MACRON
    ('\u{0231}', b"\xe5\xe7o"), // LATIN SMALL LETTER O WITH DOT ABOVE AND MACRON
    ('\u{0232}', b"\xe5Y"), // LATIN CAPITAL LETTER Y WITH MACRON
    ('\u{0233}', b"\xe5y"), // LATIN SMALL LETTER Y WITH MACRON
    ('\u{02b9}', b"\xa7"), // MODIFIER LETTER PRIME
    ('\u{02ba}', b"\xb7"), // MODIFIER LETTER DOUBLE PRIME
    ('\u{02bb}', b"\xb0"), // MODIFIER LETTER TURNED COMMA
    ('\u{02bc}', b"\xae"), // MODIFIER LETTER APOSTROPHE
    ('\u{0300}', b"\xe1"), // COMBINING GRAVE ACCENT
    ('\u{0301}', b"\xe2"), // COMBINING ACUTE ACCENT
    ('\u{0302}', b"\xe3"), // COMBINING CIRCUMFLEX ACCENT
    ('\u{0303}', b"\xe4"), // COMBINING TILDE
    ('\u{0304}', b"\xe5"), // COMBINING MACRON
    ('\u{0306}', b"\xe6"), // COMBINING BREVE
    ('\u{0307}', b"\xe7"), // COMBINING DOT ABOVE
    ('\u{0308}', b"\xe8"), // COMBINING DIAERESIS
    ('\u{0309}', b"\xe0"), // COMBINING HOOK ABOVE
    ('\u{030a}', b"\xea"), // COMBINING RING ABOVE
    ('\u{030b}', b"\xee"), // COMBINING DOUBLE ACUTE ACCENT
    ('\u{030c}', b"\xe9"), // COMBINING CARON
    ('\u{0310}', b"\xef"), // COMBINING CANDRABINDU
    ('\u{0313}', b"\xfe"), // COMBINING COMMA ABOVE
    ('\u{0315}', b"\xed"), // COMBINING COMMA ABOVE RIGHT
    ('\u{031c}', b"\xf8"), // COMBINING LEFT HALF RING BELOW
    ('\u{0323}', b"\xf2"), // COMBINING DOT BELOW
    ('\u{0324}', b"\xf3"), // COMBINING DIAERESIS BELOW
    ('\u{0325}', b"\xf4"), // COMBINING RING BELOW
    ('\u{0326}', b"\xf7"), // COMBINING COMMA BELOW
    ('\u{0327}', b"\xf0"), // COMBINING CEDILLA
    ('\u{0328}', b"\xf1"), // COMBINING OGONEK
    ('\u{032e}', b"\xf9"), // COMBINING BREVE BELOW
    ('\u{0332}', b"\xf6"), // COMBINING LOW LINE
    ('\u{0333}', b"\xf5"), // COMBINING DOUBLE LOW LINE
    ('\u{0340}', b"\xe1"), // COMBINING GRAVE TONE MARK
    ('\u{0341}', b"\xe2"), // COMBINING ACUTE TONE MARK
    ('\u{0343}', b"\xfe"), // COMBINING GREEK KORONIS
    ('\u{0344}', b"\xe2\xe8"), // COMBINING GREEK DIALYTIKA TONOS
    ('\u{0360}', b"\xfa"), // COMBINING DOUBLE TILDE
    ('\u{0361}', b"\xeb"), // COMBINING DOUBLE INVERTED BREVE
    ('\u{0374}', b"\xa7"), // GREEK NUMERAL SIGN
    ('\u{037e}', b";"), // GREEK QUESTION MARK
    ('\u{0387}', b"\xa8"), // GREEK ANO TELEIA
    ('\u{1e00}', b"\xf4A"), // LATIN CAPITAL LETTER A WITH RING BELOW
    ('\u{1e01}', b"\xf4a"), // LATIN SMALL LETTER A WITH RING BELOW
    ('\u{1e02}', b"\xe7B"), // LATIN CAPITAL LETTER B WITH DOT ABOVE
    ('\u{1e03}', b"\xe7b"), // LATIN SMALL LETTER B WITH DOT ABOVE
    ('\u{1e04}', b"\xf2B"), // LATIN CAPITAL LETTER B WITH DOT BELOW
    ('\u{1e05}', b"\xf2b"), // LATIN SMALL LETTER B WITH DOT BELOW
    ('\u{1e08}', b"\xe2\xf0C"), // LATIN CAPITAL LETTER C WITH CEDILLA AND ACUTE
    ('\u{1e09}', b"\xe2\xf0c"), // LATIN SMALL LETTER C WITH CEDILLA AND ACUTE
    ('\u{1e0a}', b"\xe7D"), // LATIN CAPITAL LETTER D WITH DOT ABOVE
    ('\u{1e0b}', b"\xe7d"), // LATIN SMALL LETTER D WITH DOT ABOVE
    ('\u{1e0c}', b"\xf2D"), // LATIN CAPITAL LETTER D WITH DOT BELOW
    ('\u{1e0d}', b"\xf2d"), // LATIN SMALL LETTER D WITH DOT BELOW
    ('\u{1e10}', b"\xf0D"), // LATIN CAPITAL LETTER D WITH CEDILLA
    ('\u{1e11}', b"\xf0d"), // LATIN SMALL LETTER D WITH CEDILLA
    ('\u{1e14}', b"\xe1\xe5E"), // LATIN CAPITAL LETTER E WITH MACRON AND GRAVE
    ('\u{1e15}', b"\xe1\xe5e"), // LATIN SMALL LETTER E WITH MACRON AND GRAVE
    ('\u{1e16}', b"\xe2\xe5E"), // LATIN CAPITAL LETTER E WITH MACRON AND ACUTE
    ('\u{1e17}', b"\xe2\xe5e"), // LATIN SMALL LETTER E WITH MACRON AND ACUTE
    ('\u{1e1c}', b"\xe6\xf0E"), // LATIN CAPITAL LETTER E WITH CEDILLA AND BREVE
    ('\u{1e1d}', b"\xe6\xf0e"), // LATIN SMALL LETTER E WITH CEDILLA AND BREVE
    ('\u{1e1e}', b"\xe7F"), // LATIN CAPITAL LETTER F WITH DOT ABOVE
    ('\u{1e1f}', b"\xe7f"), // LATIN SMALL LETTER F WITH DOT ABOVE
    ('\u{1e20}', b"\xe5G"), // LATIN CAPITAL LETTER G WITH MACRON
    ('\u{1e21}', b"\xe5g"), // LATIN SMALL LETTER G WITH MACRON
    ('\u{1e22}', b"\xe7H"), // LATIN CAPITAL LETTER H WITH DOT ABOVE
    ('\u{1e23}', b"\xe7h"), // LATIN SMALL LETTER H WITH DOT ABOVE
    ('\u{1e24}', b"\xf2H"), // LATIN CAPITAL LETTER H WITH DOT BELOW
    ('\u{1e25}', b"\xf2h"), // LATIN SMALL LETTER H WITH DOT BELOW
    ('\u{1e26}', b"\xe8H"), // LATIN CAPITAL LETTER H WITH DIAERESIS
    ('\u{1e27}', b"\xe8h"), // LATIN SMALL LETTER H WITH DIAERESIS
    ('\u{1e28}', b"\xf0H"), // LATIN CAPITAL LETTER H WITH CEDILLA
    ('\u{1e29}', b"\xf0h"), // LATIN SMALL LETTER H WITH CEDILLA
    ('\u{1e2a}', b"\xf9H"), // LATIN CAPITAL LETTER H WITH BREVE BELOW
    ('\u{1e2b}', b"\xf9h"), // LATIN SMALL LETTER H WITH BREVE BELOW
    ('\u{1e2e}', b"\xe2\xe8I"), // LATIN CAPITAL LETTER I WITH DIAERESIS AND ACUTE
    ('\u{1e2f}', b"\xe2\xe8i"), // LATIN SMALL LETTER I WITH DIAERESIS AND ACUTE
    ('\u{1e30}', b"\xe2K"), // LATIN CAPITAL LETTER K WITH ACUTE
    ('\u{1e31}', b"\xe2k"), // LATIN SMALL LETTER K WITH ACUTE
    ('\u{1e32}', b"\xf2K"), // LATIN CAPITAL LETTER K WITH DOT BELOW
    ('\u{1e33}', b"\xf2k"), // LATIN SMALL LETTER K WITH DOT BELOW
    ('\u{1e36}', b"\xf2L"), // LATIN CAPITAL LETTER L WITH DOT BELOW
    ('\u{1e37}', b"\xf2l"), // LATIN SMALL LETTER L WITH DOT BELOW
    ('\u{1e38}', b"\xe5\xf2L"), // LATIN CAPITAL LETTER L WITH DOT BELOW AND MACRON
    ('\u{1e39}', b"\xe5\xf2l"), // LATIN SMALL LETTER L WITH DOT BELOW AND MACRON
    ('\u{1e3e}', b"\xe2M"), // LATIN CAPITAL LETTER M WITH ACUTE
    ('\u{1e3f}', b"\xe2m"), // LATIN SMALL LETTER M WITH ACUTE
    ('\u{1e40}', b"\xe7M"), // LATIN CAPITAL LETTER M WITH DOT ABOVE
    ('\u{1e41}', b"\xe7m"), // LATIN SMALL LETTER M WITH DOT ABOVE
    ('\u{1e42}', b"\xf2M"), // LATIN CAPITAL LETTER M WITH DOT BELOW
    ('\u{1e43}', b"\xf2m"), // LATIN SMALL LETTER M WITH DOT BELOW
    ('\u{1e44}', b"\xe7N"), // LATIN CAPITAL LETTER N WITH DOT ABOVE
    ('\u{1e45}', b"\xe7n"), // LATIN SMALL LETTER N WITH DOT ABOVE
    ('\u{1e46}', b"\xf2N"), // LATIN CAPITAL LETTER N WITH DOT BELOW
    ('\u{1e47}', b"\xf2n"), // LATIN SMALL LETTER N WITH DOT BELOW
    ('\u{1e4c}', b"\xe2\xe4O"), // LATIN CAPITAL LETTER O WITH TILDE AND ACUTE
    ('\u{1e4d}', b"\xe2\xe4o"), // LATIN SMALL LETTER O WITH TILDE AND ACUTE
    ('\u{1e4e}', b"\xe8\xe4O"), // LATIN CAPITAL LETTER O WITH TILDE AND DIAERESIS
    ('\u{1e4f}', b"\xe8\xe4o"), // LATIN SMALL LETTER O WITH TILDE AND DIAERESIS
    ('\u{1e50}', b"\xe1\xe5O"), // LATIN CAPITAL LETTER O WITH MACRON AND GRAVE
    ('\u{1e51}', b"\xe1\xe5o"), // LATIN SMALL LETTER O WITH MACRON AND GRAVE
    ('\u{1e52}', b"\xe2\xe5O"), // LATIN CAPITAL LETTER O WITH MACRON AND ACUTE
    ('\u{1e53}', b"\xe2\xe5o"), // LATIN SMALL LETTER O WITH MACRON AND ACUTE
    ('\u{1e54}', b"\xe2P"), // LATIN CAPITAL LETTER P WITH ACUTE
    ('\u{1e55}', b"\xe2p"), // LATIN SMALL LETTER P WITH ACUTE
    ('\u{1e56}', b"\xe7P"), // LATIN CAPITAL LETTER P WITH DOT ABOVE
    ('\u{1e57}', b"\xe7p"), // LATIN SMALL LETTER P WITH DOT ABOVE
    ('\u{1e58}', b"\xe7R"), // LATIN CAPITAL LETTER R WITH DOT ABOVE
    ('\u{1e59}', b"\xe7r"), // LATIN SMALL LETTER R WITH DOT ABOVE
    ('\u{1e5a}', b"\xf2R"), // LATIN CAPITAL LETTER R WITH DOT BELOW
    ('\u{1e5b}', b"\xf2r"), // LATIN SMALL LETTER R WITH DOT BELOW
    ('\u{1e5c}', b"\xe5\xf2R"), // LATIN CAPITAL LETTER R WITH DOT BELOW AND MACRON
    ('\u{1e5d}', b"\xe5\xf2r"), // LATIN SMALL LETTER R WITH DOT BELOW AND MACRON
    ('\u{1e60}', b"\xe7S"), // LATIN CAPITAL LETTER S WITH DOT ABOVE
    ('\u{1e61}', b"\xe7s"), // LATIN SMALL LETTER S WITH DOT ABOVE
    ('\u{1e62}', b"\xf2S"), // LATIN CAPITAL LETTER S WITH DOT BELOW
    ('\u{1e63}', b"\xf2s"), // LATIN SMALL LETTER S WITH DOT BELOW
    ('\u{1e64}', b"\xe7\xe2S"), // LATIN CAPITAL LETTER S WITH ACUTE AND DOT ABOVE
    ('\u{1e65}', b"\xe7\xe2s"), // LATIN SMALL LETTER S WITH ACUTE AND DOT ABOVE
    ('\u{1e66}', b"\xe7\xe9S"), // LATIN CAPITAL LETTER S WITH CARON AND DOT ABOVE
    ('\u{1e67}', b"\xe7\xe9s"), // LATIN SMALL LETTER S WITH CARON AND DOT ABOVE
    ('\u{1e68}', b"\xe7\xf2S"), // LATIN CAPITAL LETTER S WITH DOT BELOW AND DOT ABOVE
    ('\u{1e69}', b"\xe7\xf2s"), // LATIN SMALL LETTER S WITH DOT BELOW AND DOT ABOVE
    ('\u{1e6a}', b"\xe7T"), // LATIN CAPITAL LETTER T WITH DOT ABOVE
    ('\u{1e6b}', b"\xe7t"), // LATIN SMALL LETTER T WITH DOT ABOVE
    ('\u{1e6c}', b"\xf2T"), // LATIN CAPITAL LETTER T WITH DOT BELOW
    ('\u{1e6d}', b"\xf2t"), // LATIN SMALL LETTER T WITH DOT BELOW
    ('\u{1e72}', b"\xf3U"), // LATIN CAPITAL LETTER U WITH DIAERESIS BELOW
    ('\u{1e73}', b"\xf3u"), // LATIN SMALL LETTER U WITH DIAERESIS BELOW
    ('\u{1e78}', b"\xe2\xe4U"), // LATIN CAPITAL LETTER U WITH TILDE AND ACUTE
    ('\u{1e79}', b"\xe2\xe4u"), // LATIN SMALL LETTER U WITH TILDE AND ACUTE
    ('\u{1e7a}', b"\xe8\xe5U"), // LATIN CAPITAL LETTER U WITH MACRON AND DIAERESIS
    ('\u{1e7b}', b"\xe8\xe5u"), // LATIN SMALL LETTER U WITH MACRON AND DIAERESIS
    ('\u{1e7c}', b"\xe4V"), // LATIN CAPITAL LETTER V WITH TILDE
    ('\u{1e7d}', b"\xe4v"), // LATIN SMALL LETTER V WITH TILDE
    ('\u{1e7e}', b"\xf2V"), // LATIN CAPITAL LETTER V WITH DOT BELOW
    ('\u{1e7f}', b"\xf2v"), // LATIN SMALL LETTER V WITH DOT BELOW
    ('\u{1e80}', b"\xe1W"), // LATIN CAPITAL LETTER W WITH GRAVE
    ('\u{1e81}', b"\xe1w"), // LATIN SMALL LETTER W WITH GRAVE
    ('\u{1e82}', b"\xe2W"), // LATIN CAPITAL LETTER W WITH ACUTE
    ('\u{1e83}', b"\xe2w"), // LATIN SMALL LETTER W WITH ACUTE
    ('\u{1e84}', b"\xe8W"), // LATIN CAPITAL LETTER W WITH DIAERESIS
    ('\u{1e85}', b"\xe8w"), // LATIN SMALL LETTER W WITH DIAERESIS
    ('\u{1e86}', b"\xe7W"), // LATIN CAPITAL LETTER W WITH DOT ABOVE
    ('\u{1e87}', b"\xe7w"), // LATIN SMALL LETTER W WITH DOT ABOVE
    ('\u{1e88}', b"\xf2W"), // LATIN CAPITAL LETTER W WITH DOT BELOW
    ('\u{1e89}', b"\xf2w"), // LATIN SMALL LETTER W WITH DOT BELOW
    ('\u{1e8a}', b"\xe7X"), // LATIN CAPITAL LETTER X WITH DOT ABOVE
    ('\u{1e8b}', b"\xe7x"), // LATIN SMALL LETTER X WITH DOT ABOVE
    ('\u{1e8c}', b"\xe8X"), // LATIN CAPITAL LETTER X WITH DIAERESIS
    ('\u{1e8d}', b"\xe8x"), // LATIN SMALL LETTER X WITH DIAERESIS
    ('\u{1e8e}', b"\xe7Y"), // LATIN CAPITAL LETTER Y WITH DOT ABOVE
    ('\u{1e8f}', b"\xe7y"), // LATIN SMALL LETTER Y WITH DOT ABOVE
    ('\u{1e90}', b"\xe3Z"), // LATIN CAPITAL LETTER Z WITH CIRCUMFLEX
    ('\u{1e91}', b"\xe3z"), // LATIN SMALL LETTER Z WITH CIRCUMFLEX
    ('\u{1e92}', b"\xf2Z"), // LATIN CAPITAL LETTER Z WITH DOT BELOW
    ('\u{1e93}', b"\xf2z"), // LATIN SMALL LETTER Z WITH DOT BELOW
    ('\u{1e97}', b"\xe8t"), // LATIN SMALL LETTER T WITH DIAERESIS
    ('\u{1e98}', b"\xeaw"), // LATIN SMALL LETTER W WITH RING ABOVE
    ('\u{1e99}', b"\xeay"), // LATIN SMALL LETTER Y WITH RING ABOVE
    ('\u{1ea0}', b"\xf2A"), // LATIN CAPITAL LETTER A WITH DOT BELOW
    ('\u{1ea1}', b"\xf2a"), // LATIN SMALL LETTER A WITH DOT BELOW
    ('\u{1ea2}', b"\xe0A"), // LATIN CAPITAL LETTER A WITH HOOK ABOVE
    ('\u{1ea3}', b"\xe0a"), // LATIN SMALL LETTER A WITH HOOK ABOVE
    ('\u{1ea4}', b"\xe2\xe3A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND ACUTE
    ('\u{1ea5}', b"\xe2\xe3a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX AND ACUTE
    ('\u{1ea6}', b"\xe1\xe3A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND GRAVE
    ('\u{1ea7}', b"\xe1\xe3a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX AND GRAVE
    ('\u{1ea8}', b"\xe0\xe3A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1ea9}', b"\xe0\xe3a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1eaa}', b"\xe4\xe3A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND TILDE
    ('\u{1eab}', b"\xe4\xe3a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX AND TILDE
    ('\u{1eac}', b"\xe3\xf2A"), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1ead}', b"\xe3\xf2a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1eae}', b"\xe2\xe6A"), // LATIN CAPITAL LETTER A WITH BREVE AND ACUTE
    ('\u{1eaf}', b"\xe2\xe6a"), // LATIN SMALL LETTER A WITH BREVE AND ACUTE
    ('\u{1eb0}', b"\xe1\xe6A"), // LATIN CAPITAL LETTER A WITH BREVE AND GRAVE
    ('\u{1eb1}', b"\xe1\xe6a"), // LATIN SMALL LETTER A WITH BREVE AND GRAVE
    ('\u{1eb2}', b"\xe0\xe6A"), // LATIN CAPITAL LETTER A WITH BREVE AND HOOK ABOVE
    ('\u{1eb3}', b"\xe0\xe6a"), // LATIN SMALL LETTER A WITH BREVE AND HOOK ABOVE
    ('\u{1eb4}', b"\xe4\xe6A"), // LATIN CAPITAL LETTER A WITH BREVE AND TILDE
    ('\u{1eb5}', b"\xe4\xe6a"), // LATIN SMALL LETTER A WITH BREVE AND TILDE
    ('\u{1eb6}', b"\xe6\xf2A"), // LATIN CAPITAL LETTER A WITH BREVE AND DOT BELOW
    ('\u{1eb7}', b"\xe6\xf2a"), // LATIN SMALL LETTER A WITH BREVE AND DOT BELOW
    ('\u{1eb8}', b"\xf2E"), // LATIN CAPITAL LETTER E WITH DOT BELOW
    ('\u{1eb9}', b"\xf2e"), // LATIN SMALL LETTER E WITH DOT BELOW
    ('\u{1eba}', b"\xe0E"), // LATIN CAPITAL LETTER E WITH HOOK ABOVE
    ('\u{1ebb}', b"\xe0e"), // LATIN SMALL LETTER E WITH HOOK ABOVE
    ('\u{1ebc}', b"\xe4E"), // LATIN CAPITAL LETTER E WITH TILDE
    ('\u{1ebd}', b"\xe4e"), // LATIN SMALL LETTER E WITH TILDE
    ('\u{1ebe}', b"\xe2\xe3E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND ACUTE
    ('\u{1ebf}', b"\xe2\xe3e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX AND ACUTE
    ('\u{1ec0}', b"\xe1\xe3E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND GRAVE
    ('\u{1ec1}', b"\xe1\xe3e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX AND GRAVE
    ('\u{1ec2}', b"\xe0\xe3E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1ec3}', b"\xe0\xe3e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1ec4}', b"\xe4\xe3E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND TILDE
    ('\u{1ec5}', b"\xe4\xe3e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX AND TILDE
    ('\u{1ec6}', b"\xe3\xf2E"), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1ec7}', b"\xe3\xf2e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1ec8}', b"\xe0I"), // LATIN CAPITAL LETTER I WITH HOOK ABOVE
    ('\u{1ec9}', b"\xe0i"), // LATIN SMALL LETTER I WITH HOOK ABOVE
    ('\u{1eca}', b"\xf2I"), // LATIN CAPITAL LETTER I WITH DOT BELOW
    ('\u{1ecb}', b"\xf2i"), // LATIN SMALL LETTER I WITH DOT BELOW
    ('\u{1ecc}', b"\xf2O"), // LATIN CAPITAL LETTER O WITH DOT BELOW
    ('\u{1ecd}', b"\xf2o"), // LATIN SMALL LETTER O WITH DOT BELOW
    ('\u{1ece}', b"\xe0O"), // LATIN CAPITAL LETTER O WITH HOOK ABOVE
    ('\u{1ecf}', b"\xe0o"), // LATIN SMALL LETTER O WITH HOOK ABOVE
    ('\u{1ed0}', b"\xe2\xe3O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND ACUTE
    ('\u{1ed1}', b"\xe2\xe3o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX AND ACUTE
    ('\u{1ed2}', b"\xe1\xe3O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND GRAVE
    ('\u{1ed3}', b"\xe1\xe3o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX AND GRAVE
    ('\u{1ed4}', b"\xe0\xe3O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1ed5}', b"\xe0\xe3o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX AND HOOK ABOVE
    ('\u{1ed6}', b"\xe4\xe3O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND TILDE
    ('\u{1ed7}', b"\xe4\xe3o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX AND TILDE
    ('\u{1ed8}', b"\xe3\xf2O"), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1ed9}', b"\xe3\xf2o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX AND DOT BELOW
    ('\u{1eda}', b"\xe2\xac"), // LATIN CAPITAL LETTER O WITH HORN AND ACUTE
    ('\u{1edb}', b"\xe2\xbc"), // LATIN SMALL LETTER O WITH HORN AND ACUTE
    ('\u{1edc}', b"\xe1\xac"), // LATIN CAPITAL LETTER O WITH HORN AND GRAVE
    ('\u{1edd}', b"\xe1\xbc"), // LATIN SMALL LETTER O WITH HORN AND GRAVE
    ('\u{1ede}', b"\xe0\xac"), // LATIN CAPITAL LETTER O WITH HORN AND HOOK ABOVE
    ('\u{1edf}', b"\xe0\xbc"), // LATIN SMALL LETTER O WITH HORN AND HOOK ABOVE
    ('\u{1ee0}', b"\xe4\xac"), // LATIN CAPITAL LETTER O WITH HORN AND TILDE
    ('\u{1ee1}', b"\xe4\xbc"), // LATIN SMALL LETTER O WITH HORN AND TILDE
    ('\u{1ee2}', b"\xf2\xac"), // LATIN CAPITAL LETTER O WITH HORN AND DOT BELOW
    ('\u{1ee3}', b"\xf2\xbc"), // LATIN SMALL LETTER O WITH HORN AND DOT BELOW
    ('\u{1ee4}', b"\xf2U"), // LATIN CAPITAL LETTER U WITH DOT BELOW
    ('\u{1ee5}', b"\xf2u"), // LATIN SMALL LETTER U WITH DOT BELOW
    ('\u{1ee6}', b"\xe0U"), // LATIN CAPITAL LETTER U WITH HOOK ABOVE
    ('\u{1ee7}', b"\xe0u"), // LATIN SMALL LETTER U WITH HOOK ABOVE
    ('\u{1ee8}', b"\xe2\xad"), // LATIN CAPITAL LETTER U WITH HORN AND ACUTE
    ('\u{1ee9}', b"\xe2\xbd"), // LATIN SMALL LETTER U WITH HORN AND ACUTE
    ('\u{1eea}', b"\xe1\xad"), // LATIN CAPITAL LETTER U WITH HORN AND GRAVE
    ('\u{1eeb}', b"\xe1\xbd"), // LATIN SMALL LETTER U WITH HORN AND GRAVE
    ('\u{1eec}', b"\xe0\xad"), // LATIN CAPITAL LETTER U WITH HORN AND HOOK ABOVE
    ('\u{1eed}', b"\xe0\xbd"), // LATIN SMALL LETTER U WITH HORN AND HOOK ABOVE
    ('\u{1eee}', b"\xe4\xad"), // LATIN CAPITAL LETTER U WITH HORN AND TILDE
    ('\u{1eef}', b"\xe4\xbd"), // LATIN SMALL LETTER U WITH HORN AND TILDE
    ('\u{1ef0}', b"\xf2\xad"), // LATIN CAPITAL LETTER U WITH HORN AND DOT BELOW
    ('\u{1ef1}', b"\xf2\xbd"), // LATIN SMALL LETTER U WITH HORN AND DOT BELOW
    ('\u{1ef2}', b"\xe1Y"), // LATIN CAPITAL LETTER Y WITH GRAVE
    ('\u{1ef3}', b"\xe1y"), // LATIN SMALL LETTER Y WITH GRAVE
    ('\u{1ef4}', b"\xf2Y"), // LATIN CAPITAL LETTER Y WITH DOT BELOW
    ('\u{1ef5}', b"\xf2y"), // LATIN SMALL LETTER Y WITH DOT BELOW
    ('\u{1ef6}', b"\xe0Y"), // LATIN CAPITAL LETTER Y WITH HOOK ABOVE
    ('\u{1ef7}', b"\xe0y"), // LATIN SMALL LETTER Y WITH HOOK ABOVE
    ('\u{1ef8}', b"\xe4Y"), // LATIN CAPITAL LETTER Y WITH TILDE
    ('\u{1ef9}', b"\xe4y"), // LATIN SMALL LETTER Y WITH TILDE
    ('\u{1fef}', b"`"), // GREEK VARIA
    ('\u{200c}', b"\x8e"), // ZERO WIDTH NON-JOINER
    ('\u{200d}', b"\x8d"), // ZERO WIDTH JOINER
    ('\u{20ac}', b"\xc8"), // EURO SIGN
    ('\u{2113}', b"\xc1"), // SCRIPT SMALL L
    ('\u{2117}', b"\xc2"), // SOUND RECORDING COPYRIGHT
    ('\u{212b}', b"\xeaA"), // ANGSTROM SIGN
    ('\u{266d}', b"\xa9"), // MUSIC FLAT SIGN
    ('\u{266f}', b"\xc4"), // MUSIC SHARP SIGN
];
