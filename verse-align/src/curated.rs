//! Hand-curated Spanish → English entries.
//!
//! Single-word keys are stored in normalized form (see [`crate::normalize`]).
//! Multi-word keys are lowercase but keep their accents. The first candidate
//! of every entry is its default sense.

pub(crate) static CURATED_ENTRIES: &[(&str, &[&str])] = &[
    // articles
    ("el", &["the", "he"]),
    ("la", &["the", "her", "it"]),
    ("los", &["the", "them"]),
    ("las", &["the", "them"]),
    ("un", &["a", "an", "one"]),
    ("una", &["a", "an", "one"]),
    ("unos", &["some"]),
    ("unas", &["some"]),
    ("lo", &["it", "him", "the"]),
    ("al", &["to the", "unto the"]),
    ("del", &["of the"]),
    // pronouns
    ("yo", &["I"]),
    ("tu", &["your", "you", "thy", "thou"]),
    ("ti", &["you", "thee"]),
    ("usted", &["you"]),
    ("ella", &["she", "her"]),
    ("nosotros", &["we", "us"]),
    ("vosotros", &["you all", "ye", "you"]),
    ("ellos", &["they", "them"]),
    ("ellas", &["they", "them"]),
    ("me", &["me", "myself"]),
    ("te", &["you", "thee"]),
    ("nos", &["us"]),
    ("os", &["you", "ye"]),
    ("le", &["him", "her", "unto him"]),
    ("les", &["them", "unto them"]),
    ("mi", &["my", "mine"]),
    ("mis", &["my"]),
    ("tus", &["your", "thy"]),
    ("su", &["his", "her", "its", "their", "your"]),
    ("sus", &["his", "her", "their", "your"]),
    ("nuestro", &["our"]),
    ("nuestra", &["our"]),
    ("nuestros", &["our"]),
    ("vuestro", &["your"]),
    ("vuestra", &["your"]),
    ("este", &["this"]),
    ("esta", &["this", "is"]),
    ("estos", &["these"]),
    ("estas", &["these", "are"]),
    ("ese", &["that"]),
    ("esa", &["that"]),
    ("esos", &["those"]),
    ("aquel", &["that"]),
    ("aquella", &["that"]),
    ("aquellos", &["those"]),
    ("esto", &["this"]),
    ("eso", &["that"]),
    ("aquello", &["that"]),
    ("quien", &["who", "whom", "whoever"]),
    ("quienes", &["who", "whom"]),
    ("cual", &["which", "what"]),
    ("cuales", &["which"]),
    ("cuyo", &["whose"]),
    ("todo", &["all", "every", "everything"]),
    ("toda", &["all", "every"]),
    ("todos", &["all", "everyone"]),
    ("todas", &["all"]),
    ("nada", &["nothing"]),
    ("nadie", &["no one", "none"]),
    ("alguno", &["some", "any"]),
    ("algunos", &["some"]),
    ("ninguno", &["none", "no"]),
    ("otro", &["other", "another"]),
    ("otros", &["others", "other"]),
    ("mismo", &["same", "self"]),
    // prepositions
    ("a", &["to", "unto", "at"]),
    ("ante", &["before"]),
    ("bajo", &["under", "beneath"]),
    ("con", &["with"]),
    ("contra", &["against"]),
    ("de", &["of", "from"]),
    ("desde", &["from", "since"]),
    ("en", &["in", "on", "into"]),
    ("entre", &["between", "among"]),
    ("hacia", &["toward", "towards"]),
    ("hasta", &["until", "unto", "even"]),
    ("para", &["for", "to"]),
    ("por", &["by", "for", "through"]),
    ("segun", &["according"]),
    ("sin", &["without"]),
    ("sobre", &["over", "upon", "on"]),
    ("tras", &["after", "behind"]),
    ("delante", &["before"]),
    ("dentro", &["within", "inside"]),
    ("fuera", &["out", "outside", "without"]),
    // conjunctions and connectives
    ("y", &["and"]),
    ("e", &["and"]),
    ("o", &["or"]),
    ("u", &["or"]),
    ("ni", &["nor", "neither"]),
    ("pero", &["but"]),
    ("mas", &["but", "more"]),
    ("sino", &["but"]),
    ("que", &["that", "which", "what", "than", "who"]),
    ("porque", &["because", "for"]),
    ("pues", &["for", "then", "therefore"]),
    ("si", &["if", "yes"]),
    ("como", &["like", "as", "how"]),
    ("cuando", &["when"]),
    ("donde", &["where"]),
    ("mientras", &["while"]),
    ("aunque", &["although", "though"]),
    ("entonces", &["then"]),
    ("luego", &["then", "later"]),
    ("tambien", &["also"]),
    ("tampoco", &["neither"]),
    ("asi", &["so", "thus"]),
    ("ademas", &["besides", "moreover"]),
    ("incluso", &["even"]),
    ("solo", &["only", "alone"]),
    // adverbs
    ("no", &["not", "no"]),
    ("nunca", &["never"]),
    ("jamas", &["never", "ever"]),
    ("siempre", &["always", "ever"]),
    ("ahora", &["now"]),
    ("hoy", &["today", "this day"]),
    ("ayer", &["yesterday"]),
    ("manana", &["tomorrow", "morning"]),
    ("antes", &["before"]),
    ("despues", &["after", "afterward"]),
    ("aqui", &["here"]),
    ("ahi", &["there"]),
    ("alli", &["there"]),
    ("alla", &["there", "yonder"]),
    ("muy", &["very"]),
    ("mucho", &["much", "many"]),
    ("muchos", &["many"]),
    ("poco", &["little", "few"]),
    ("pocos", &["few"]),
    ("bien", &["well", "good"]),
    ("mal", &["evil", "bad"]),
    ("cerca", &["near", "nigh"]),
    ("lejos", &["far"]),
    ("arriba", &["above", "up"]),
    ("abajo", &["below", "beneath", "down"]),
    ("tanto", &["so much", "so"]),
    ("quizas", &["perhaps"]),
    ("ya", &["already", "now"]),
    ("aun", &["yet", "still", "even"]),
    ("mayor", &["greater", "elder"]),
    ("menor", &["less", "younger"]),
    ("mejor", &["better"]),
    ("peor", &["worse"]),
    // ser / estar / haber
    ("ser", &["be"]),
    ("es", &["is"]),
    ("son", &["are"]),
    ("soy", &["am"]),
    ("eres", &["are", "art"]),
    ("somos", &["are"]),
    ("era", &["was"]),
    ("eran", &["were"]),
    ("fue", &["was", "went"]),
    ("fueron", &["were", "went"]),
    ("sera", &["will be", "shall be"]),
    ("seran", &["will be", "shall be"]),
    ("sea", &["be", "let be"]),
    ("sean", &["be"]),
    ("estar", &["be"]),
    ("estoy", &["am"]),
    ("estan", &["are"]),
    ("estaba", &["was"]),
    ("estaban", &["were"]),
    ("estuvo", &["was"]),
    ("haber", &["have"]),
    ("he", &["have"]),
    ("has", &["have", "hast"]),
    ("ha", &["has", "hath"]),
    ("hemos", &["have"]),
    ("han", &["have"]),
    ("habia", &["there was", "had"]),
    ("habian", &["there were", "had"]),
    ("hay", &["there is", "there are"]),
    ("hubo", &["there was", "was"]),
    // high-frequency verbs
    ("creo", &["created", "believe"]),
    ("crear", &["create"]),
    ("creado", &["created"]),
    ("dijo", &["said"]),
    ("dice", &["says", "saith"]),
    ("dicho", &["said"]),
    ("decir", &["say"]),
    ("digo", &["say"]),
    ("hizo", &["made", "did"]),
    ("hacer", &["do", "make"]),
    ("hace", &["makes", "does"]),
    ("hecho", &["made", "done"]),
    ("haga", &["do", "make"]),
    ("vio", &["saw"]),
    ("ver", &["see"]),
    ("veo", &["see"]),
    ("visto", &["seen"]),
    ("vino", &["came", "wine"]),
    ("venir", &["come"]),
    ("viene", &["comes", "cometh"]),
    ("ven", &["come", "see"]),
    ("vengo", &["come"]),
    ("ir", &["go"]),
    ("va", &["goes"]),
    ("voy", &["go"]),
    ("id", &["go"]),
    ("dio", &["gave"]),
    ("dar", &["give"]),
    ("doy", &["give"]),
    ("dado", &["given"]),
    ("tiene", &["has", "hath"]),
    ("tener", &["have"]),
    ("tengo", &["have"]),
    ("tenia", &["had"]),
    ("tuvo", &["had"]),
    ("puede", &["can", "may"]),
    ("poder", &["power", "be able"]),
    ("pudo", &["could"]),
    ("quiere", &["wants", "will"]),
    ("quiero", &["want", "will"]),
    ("sabe", &["knows", "knoweth"]),
    ("saber", &["know"]),
    ("se", &["himself", "themselves", "itself", "know"]),
    ("conocer", &["know"]),
    ("conoce", &["knows", "knoweth"]),
    ("amar", &["love"]),
    ("ama", &["loves", "loveth"]),
    ("amado", &["beloved", "loved"]),
    ("amo", &["master", "love", "loved"]),
    ("creer", &["believe"]),
    ("cree", &["believes", "believeth"]),
    ("creyo", &["believed"]),
    ("llamo", &["called"]),
    ("llamar", &["call"]),
    ("llama", &["calls", "calleth"]),
    ("separo", &["divided", "separated"]),
    ("oir", &["hear"]),
    ("oye", &["hears", "heareth"]),
    ("oyo", &["heard"]),
    ("hablar", &["speak"]),
    ("hablo", &["spoke", "spake", "speak"]),
    ("habla", &["speaks", "speaketh"]),
    ("vivir", &["live"]),
    ("vive", &["lives", "liveth"]),
    ("vivio", &["lived"]),
    ("morir", &["die"]),
    ("murio", &["died"]),
    ("muere", &["dies", "dieth"]),
    ("salvar", &["save"]),
    ("salva", &["saves", "saveth"]),
    ("salvo", &["saved", "safe"]),
    ("perdonar", &["forgive"]),
    ("perdona", &["forgive", "forgiveth"]),
    ("bendijo", &["blessed"]),
    ("bendecir", &["bless"]),
    ("bendito", &["blessed"]),
    ("envio", &["sent"]),
    ("enviar", &["send"]),
    ("andar", &["walk"]),
    ("anduvo", &["walked"]),
    ("guardar", &["keep"]),
    ("guarda", &["keeps", "keepeth"]),
    ("escribir", &["write"]),
    ("escrito", &["written"]),
    ("respondio", &["answered"]),
    ("tomo", &["took"]),
    ("tomar", &["take"]),
    ("puso", &["put", "set"]),
    ("poner", &["put"]),
    ("reina", &["reigns", "queen"]),
    ("seguir", &["follow"]),
    ("sigue", &["follows", "followeth"]),
    ("buscar", &["seek"]),
    ("busca", &["seeks", "seeketh"]),
    ("pedir", &["ask"]),
    ("pide", &["asks", "asketh"]),
    ("orar", &["pray"]),
    ("oro", &["prayed", "gold"]),
    ("alabar", &["praise"]),
    ("alabad", &["praise"]),
    ("temer", &["fear"]),
    ("teme", &["fears", "feareth"]),
    ("temas", &["fear"]),
    ("nacio", &["was born"]),
    ("nacido", &["born"]),
    ("levanto", &["rose", "lifted"]),
    ("resucito", &["rose", "risen"]),
    // biblical and devotional nouns
    ("dios", &["God"]),
    ("senor", &["Lord", "lord"]),
    ("jehova", &["LORD", "Lord"]),
    ("jesus", &["Jesus"]),
    ("cristo", &["Christ"]),
    ("espiritu", &["Spirit", "spirit"]),
    ("padre", &["Father", "father"]),
    ("hijo", &["Son", "son"]),
    ("hijos", &["children", "sons"]),
    ("hija", &["daughter"]),
    ("madre", &["mother"]),
    ("hermano", &["brother"]),
    ("hermanos", &["brethren", "brothers"]),
    ("hombre", &["man"]),
    ("hombres", &["men"]),
    ("mujer", &["woman", "wife"]),
    ("mujeres", &["women"]),
    ("pueblo", &["people"]),
    ("rey", &["king"]),
    ("reyes", &["kings"]),
    ("profeta", &["prophet"]),
    ("angel", &["angel"]),
    ("angeles", &["angels"]),
    ("discipulos", &["disciples"]),
    ("apostol", &["apostle"]),
    ("sacerdote", &["priest"]),
    ("templo", &["temple"]),
    ("iglesia", &["church"]),
    ("altar", &["altar"]),
    ("ley", &["law"]),
    ("palabra", &["word"]),
    ("palabras", &["words"]),
    ("verbo", &["Word", "word"]),
    ("verdad", &["truth"]),
    ("vida", &["life"]),
    ("muerte", &["death"]),
    ("amor", &["love"]),
    ("fe", &["faith"]),
    ("esperanza", &["hope"]),
    ("gracia", &["grace"]),
    ("paz", &["peace"]),
    ("gloria", &["glory"]),
    ("pecado", &["sin"]),
    ("pecados", &["sins"]),
    ("salvacion", &["salvation"]),
    ("misericordia", &["mercy"]),
    ("justicia", &["righteousness", "justice"]),
    ("justo", &["righteous", "just"]),
    ("santo", &["holy", "saint"]),
    ("santos", &["saints", "holy"]),
    ("alma", &["soul"]),
    ("corazon", &["heart"]),
    ("nombre", &["name"]),
    ("mundo", &["world"]),
    ("reino", &["kingdom", "reigned"]),
    ("cielo", &["heaven", "sky"]),
    ("cielos", &["heavens", "heaven"]),
    ("tierra", &["earth"]),
    ("mar", &["sea"]),
    ("mares", &["seas"]),
    ("aguas", &["waters"]),
    ("agua", &["water"]),
    ("luz", &["light"]),
    ("tinieblas", &["darkness"]),
    ("oscuridad", &["darkness"]),
    ("dia", &["day"]),
    ("dias", &["days"]),
    ("noche", &["night"]),
    ("tarde", &["evening", "afternoon", "late"]),
    ("sol", &["sun"]),
    ("luna", &["moon"]),
    ("estrellas", &["stars"]),
    ("abismo", &["deep", "abyss"]),
    ("faz", &["face"]),
    ("rostro", &["face", "countenance"]),
    ("firmamento", &["firmament"]),
    ("arbol", &["tree"]),
    ("arboles", &["trees"]),
    ("fruto", &["fruit"]),
    ("semilla", &["seed"]),
    ("hierba", &["grass", "herb"]),
    ("bestias", &["beasts"]),
    ("animales", &["animals"]),
    ("aves", &["birds", "fowl"]),
    ("peces", &["fish", "fishes"]),
    ("monte", &["mount", "mountain"]),
    ("rio", &["river"]),
    ("desierto", &["wilderness", "desert"]),
    ("camino", &["way", "road", "path"]),
    ("casa", &["house", "home"]),
    ("ciudad", &["city"]),
    ("pan", &["bread"]),
    ("sangre", &["blood"]),
    ("cuerpo", &["body"]),
    ("mano", &["hand"]),
    ("manos", &["hands"]),
    ("ojos", &["eyes"]),
    ("boca", &["mouth"]),
    ("voz", &["voice"]),
    ("principio", &["beginning"]),
    ("fin", &["end"]),
    ("tiempo", &["time"]),
    ("cosas", &["things"]),
    ("obra", &["work"]),
    ("obras", &["works"]),
    ("pastor", &["shepherd", "pastor"]),
    ("ovejas", &["sheep"]),
    ("cordero", &["lamb"]),
    ("cruz", &["cross"]),
    ("evangelio", &["gospel"]),
    ("testimonio", &["testimony", "witness"]),
    ("siervo", &["servant"]),
    ("siervos", &["servants"]),
    // adjectives
    ("bueno", &["good"]),
    ("buena", &["good"]),
    ("buenos", &["good"]),
    ("malo", &["evil", "bad"]),
    ("grande", &["great", "big"]),
    ("gran", &["great"]),
    ("grandes", &["great"]),
    ("pequeno", &["small", "little"]),
    ("nuevo", &["new"]),
    ("nueva", &["new"]),
    ("viejo", &["old"]),
    ("eterno", &["eternal", "everlasting"]),
    ("eterna", &["eternal", "everlasting"]),
    ("vivo", &["living", "alive"]),
    ("muerto", &["dead"]),
    ("desordenada", &["without form"]),
    ("vacia", &["void", "empty"]),
    ("alto", &["high"]),
    ("altisimo", &["most High", "highest"]),
    ("fiel", &["faithful"]),
    ("digno", &["worthy"]),
    ("limpio", &["clean"]),
    ("puro", &["pure"]),
    ("primero", &["first"]),
    ("ultimo", &["last"]),
    // numbers and ordinals
    ("uno", &["one"]),
    ("dos", &["two"]),
    ("tres", &["three"]),
    ("cuatro", &["four"]),
    ("cinco", &["five"]),
    ("seis", &["six"]),
    ("siete", &["seven"]),
    ("ocho", &["eight"]),
    ("nueve", &["nine"]),
    ("diez", &["ten"]),
    ("doce", &["twelve"]),
    ("cuarenta", &["forty"]),
    ("mil", &["thousand"]),
    ("primer", &["first"]),
    ("segundo", &["second"]),
    ("tercer", &["third"]),
    ("tercero", &["third"]),
    ("cuarto", &["fourth"]),
    ("quinto", &["fifth"]),
    ("sexto", &["sixth"]),
    ("septimo", &["seventh"]),
    // question words
    ("cuanto", &["how much"]),
    ("cuantos", &["how many"]),
    // phrases
    ("tal vez", &["maybe"]),
    ("a veces", &["sometimes"]),
    ("a menudo", &["often"]),
    ("rara vez", &["rarely"]),
    ("sin embargo", &["however"]),
    ("no obstante", &["nevertheless"]),
    ("por lo tanto", &["therefore"]),
    ("así que", &["so"]),
    ("por qué", &["why"]),
    ("para siempre", &["for ever", "forever"]),
    ("de cierto", &["verily"]),
];
