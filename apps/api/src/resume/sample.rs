/// Example resume offered to users who want to try the analyzer.
pub const SAMPLE_RESUME: &str = "John Smith
Software Developer | john.smith@email.com | (555) 123-4567 | LinkedIn: /in/johnsmith

PROFESSIONAL SUMMARY
Experienced Software Developer with 5+ years of expertise in full-stack development, specializing in JavaScript, React, and Node.js. Proven track record of delivering scalable web applications and leading cross-functional teams to achieve project goals.

WORK EXPERIENCE
Senior Software Developer | TechCorp Inc. | 2021 - Present
• Developed and maintained 15+ web applications using React.js and Node.js
• Led a team of 4 developers, improving code quality by 30%
• Implemented automated testing, reducing bugs by 25%
• Collaborated with UX/UI designers to improve user experience

Software Developer | StartupXYZ | 2019 - 2021
• Built responsive web applications serving 10,000+ daily active users
• Optimized database queries, improving application performance by 40%
• Participated in agile development cycles and code reviews

EDUCATION
Bachelor of Science in Computer Science | State University | 2019

SKILLS
JavaScript, React.js, Node.js, Python, SQL, Git, AWS, Docker, Agile Development";
